use crate::ModelFormat;
use crate::inputs::{Collaborators, SiteArgs};

pub fn handle(site: &SiteArgs, format: ModelFormat) -> anyhow::Result<()> {
    let inputs = site.resolve()?;

    let collaborators = Collaborators::new(&inputs.config, inputs.platform);
    let document = collaborators
        .builder()
        .build(&inputs.flags, &inputs.volumes, inputs.platform)?;

    let output = match format {
        ModelFormat::Json => serde_json::to_string_pretty(&document)? + "\n",
        ModelFormat::Yaml => serde_yaml::to_string(&document)?,
    };
    print!("{output}");

    Ok(())
}
