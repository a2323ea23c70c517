//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as SortDescending, LuChevronUp as SortAscending, LuDownload as Download,
        LuFile as File, LuFileCode as FileCode, LuFileText as FileText, LuFolder as Folder,
        LuGlobe as Network, LuImage as FileImage, LuInfo as Info, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as SortDescending, BsChevronUp as SortAscending, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkImage as FileImage,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsGlobe as Network,
        BsInfoCircle as Info, BsPerson as User, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CLOSE, Close);
themed_icon!(INFO, Info);
themed_icon!(USER, User);
themed_icon!(NETWORK, Network);
