pub const DEFAULT_QUALITY: u8 = 90;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Maximum accepted source file size (100MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << LUMA_SHIFT.
pub const LUMA_R: u32 = 4899;
pub const LUMA_G: u32 = 9617;
pub const LUMA_B: u32 = 1868;
pub const LUMA_SHIFT: u32 = 14;

pub const DEFAULT_CONFIG_PATH: &str = "value.ini";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const UPLOADS_SUBDIR: &str = "uploads";
pub const PROCESSED_SUBDIR: &str = "processed";
pub const PROCESSED_PREFIX: &str = "processed_";
pub const TEMP_PREFIX: &str = "temp_";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const ORIGINAL_SIZE_PREFIX: &str = "📊 Original size:";
pub const PROCESSED_SIZE_PREFIX: &str = "📈 Processed size:";
pub const COMPRESSION_RATIO_PREFIX: &str = "🎯 Size change:";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
