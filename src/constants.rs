pub const ASSET_FOLDER: &str = "Slides/Banner";       // Default folder scanned for banner images
pub const HTML_ID_PREFIX: &str = "BannerComponent";    // Prefix of a banner's html id
pub const WRAPPER_ID_SUFFIX: &str = "_Wrapper";        // Appended to the html id for the wrapper element

pub const COMPONENT_CLASS: &str = "bannercomponent";   // Class carried by every banner element
pub const WRAPPER_CLASS: &str = "wrapper";             // Class of the element holding the slide strip
pub const ANIMATED_CLASS: &str = "animated";           // Added to component and wrapper when animating

pub const DEFAULT_ANIMATION_DURATION: u32 = 20;        // Duration of one scroll cycle (seconds)
pub const DEFAULT_STRIP_HEIGHT: u32 = 200;             // Rendered slide height used for strip planning (pixels)

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
