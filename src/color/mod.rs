//! Channel arithmetic, channel orders and tagged color values.

pub mod channel;
pub mod gray;
pub mod order;
pub mod rgba;
pub mod space;

pub use channel::Channel;
pub use gray::{Gray, Gray8, Gray16, Gray32F};
pub use order::{
    AlphaOrder, ChannelOrder, OrderAbgr, OrderArgb, OrderBgr, OrderBgra, OrderBgrx, OrderRgb,
    OrderRgba, OrderRgbx, OrderXbgr, OrderXrgb,
};
pub use rgba::{
    AlphaState, Premultiplied, Rgba, Rgba8, Rgba8Pre, Rgba16, Rgba16Pre, Rgba32F, Rgba32FPre,
    Srgba8, Srgba8Pre, Straight,
};
pub use space::{ColorSpace, Linear, Srgb, linear_to_srgb, srgb_to_linear};
