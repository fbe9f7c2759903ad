use anyhow::Result;

use xml_checks::file_discovery::FileDiscovery;
use xml_checks::syntax_check::SyntaxCheckRunner;
use xml_checks::SyntaxCheckCli;

fn main() -> Result<()> {
    let cli = SyntaxCheckCli::parse_args();
    cli.validate()?;

    let discovery = FileDiscovery::new()
        .with_extensions(cli.get_extensions())
        .with_follow_symlinks(cli.follow_symlinks)
        .with_exclude_patterns(cli.exclude_patterns.clone())?;

    let runner = SyntaxCheckRunner::with_discovery(discovery);
    runner.run(&cli.root)?;
    Ok(())
}
