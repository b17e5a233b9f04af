//! Static configuration of the tracked games' wiki pages.

/// Where and how to scrape one game's codes.
#[derive(Debug, Clone, Copy)]
pub struct WikiProfile {
    pub slug: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    /// Phrases rendered inside code cells that are not part of any code.
    pub noise: &'static [&'static str],
}

pub const GENSHIN: WikiProfile = WikiProfile {
    slug: "genshin",
    name: "Genshin Impact",
    url: "https://genshin-impact.fandom.com/wiki/Promotional_Codes",
    noise: &[],
};

pub const STAR_RAIL: WikiProfile = WikiProfile {
    slug: "hsr",
    name: "Honkai: Star Rail",
    url: "https://honkai-star-rail.fandom.com/wiki/Redemption_Code",
    noise: &["Quick Redeem"],
};

pub const ZENLESS: WikiProfile = WikiProfile {
    slug: "zzz",
    name: "Zenless Zone Zero",
    url: "https://zenless-zone-zero.fandom.com/wiki/Redemption_Code",
    noise: &["Quick Redeem"],
};

/// Registration order is the order games are listed and scraped.
pub const PROFILES: [WikiProfile; 3] = [GENSHIN, STAR_RAIL, ZENLESS];
