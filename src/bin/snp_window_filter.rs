use gwas_prep::window_filter;

fn main() -> anyhow::Result<()> {
    let cfg = window_filter::handle_cli()?;
    window_filter::process(&cfg)
}
