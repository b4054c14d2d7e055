use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let palette_id = args.next();
    let accent_id = args.next();

    let colors = artisan_theme::run(palette_id.as_deref(), accent_id.as_deref())
        .context("failed to resolve theme")?;
    println!("{colors}");
    Ok(())
}
