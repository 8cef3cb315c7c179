use std::io;

fn main() -> io::Result<()> {
    #[cfg(target_os = "windows")]
    winres::WindowsResource::new()
        .set("ProductName", "Draw Bench")
        .set("FileDescription", "Draw Bench")
        .set("InternalName", "Draw Bench")
        .set("LegalCopyright", "Copyright © 2026 draw-bench contributors")
        .set_language(0x0009) // english
        .compile()?;

    Ok(())
}
