pub mod source_info;
pub use source_info::*;

pub mod novel_info;
pub use novel_info::*;

pub mod chapter_info;
pub use chapter_info::*;
