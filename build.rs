// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the version metadata of the demo player into the
//! executable so it shows up in the file properties dialog.

fn main() {
    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Iced Playback Overlay");
        res.set("FileDescription", "Video playback overlay demo");
        res.compile().expect("Failed to compile Windows resources");
    }
}
