pub const ITEMS_PER_PAGE: usize = 5;

pub mod messages {
    pub const INVALID_PAGE: &str = "Invalid page number. Page must be a positive integer.";

    pub const EPISODE_NOT_FOUND: &str = "Episode not found";

    pub const INTERNAL_ERROR: &str = "Internal server error";

    pub const ROUTE_NOT_FOUND: &str = "Tidak ada yang ditemukan di sini";
}

pub mod player {
    pub const WATERMARK_URL: &str = "https://files.catbox.moe/evmloe.png";

    /// Titles longer than this scroll as a marquee.
    pub const MARQUEE_THRESHOLD: usize = 20;
}
