use std::env::consts;

pub struct Version;

impl Version {
    pub fn print() {
        println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        println!("Target: {}-{}", consts::ARCH, consts::OS);

        #[cfg(debug_assertions)]
        println!("Profile: debug");
        #[cfg(not(debug_assertions))]
        println!("Profile: release");

        println!("Built: {}", env!("BUILD_DATE"));
    }
}
