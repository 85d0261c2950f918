//! Version information

use xibugo_core::config::PRODUCTION_URL;
use xibugo_core::error::XibugoResult;

/// API version the client targets
pub const API_VERSION: &str = "v2";

pub fn show() -> XibugoResult<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    format!(
        "Xibugo CLI version:        {}\n\
         Xibugo API endpoint:       {}\n\
         Xibugo API version:        {}\n\
         OS/Arch (client):          {}/{}\n",
        env!("CARGO_PKG_VERSION"),
        PRODUCTION_URL,
        API_VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
