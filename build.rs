// Necessary because of this issue: https://github.com/rust-lang/cargo/issues/9641
// Only the esp32 build links against esp-idf; host builds have nothing to propagate.
#[cfg(feature = "esp32")]
fn main() -> anyhow::Result<()> {
    embuild::build::CfgArgs::output_propagated("ESP_IDF")?;
    embuild::build::LinkArgs::output_propagated("ESP_IDF")
}

#[cfg(not(feature = "esp32"))]
fn main() -> anyhow::Result<()> {
    Ok(())
}
