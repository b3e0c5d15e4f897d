// Ad layout: supported formats and the size/font preset resolver.
// Pure lookups; every miss falls back to a default instead of failing.

pub mod ad_size;
pub mod presets;

pub use ad_size::{ad_sizes, find_ad_size, AdSize, FormatGroup};
pub use presets::{resolve_preset, FontSizes, SizePreset};
