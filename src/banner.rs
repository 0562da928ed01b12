//! Startup banner.

use crate::consts::{HOMEPAGE, REPO};

/// What the banner reports about this run.
pub struct BannerInfo<'a> {
    pub source: &'a str,
    pub endpoint: &'a str,
    pub auth_status: &'a str,
    pub timeout: &'a str,
}

pub fn render_banner(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║     Astrology & Kundali Generator     ║
   ╚═══════════════════════════════════════╝

   version   {}
   home      {}
   repo      {}
   source    {}
   endpoint  {}
   auth      {}
   timeout   {}
"#,
        env!("CARGO_PKG_VERSION"),
        HOMEPAGE,
        REPO,
        info.source,
        info.endpoint,
        info.auth_status,
        info.timeout,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", render_banner(info));
}
