use gwas_prep::annotate;

fn main() -> anyhow::Result<()> {
    let cfg = annotate::handle_cli()?;
    annotate::process(&cfg)
}
