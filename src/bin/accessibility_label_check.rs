use anyhow::Result;

use xml_checks::exemptions::ExemptionSet;
use xml_checks::label_check::LabelCheckRunner;
use xml_checks::LabelCheckCli;

fn main() -> Result<()> {
    let cli = LabelCheckCli::parse_args();
    cli.validate()?;

    let exemptions = match &cli.exemptions {
        Some(path) => ExemptionSet::load(path)?,
        None => ExemptionSet::load_default(&cli.root)?,
    };

    let runner = LabelCheckRunner::new(exemptions).with_source_root(cli.source_root.clone());
    runner.run(&cli.root, &cli.manifests)?;
    Ok(())
}
