use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::data_loader;
use crate::export;
use crate::generator;
use crate::output;
use crate::params;
use crate::plan::{OutputKind, Plan};
use crate::roster::SchoolRecord;

pub fn execute_plan(plan: String) -> Result<()> {
    info!("Executing plan");

    let plan_file_path = Path::new(&plan);
    let path_content = std::fs::read_to_string(plan_file_path)?;
    let plan: Plan = serde_yaml::from_str(&path_content)?;
    debug!("Executing plan: {:?}", plan);

    plan.settings.validate()?;
    let params = params::parameter_set(&plan.settings.parameter_set)?;

    let base_dir = plan_file_path.parent().unwrap_or_else(|| Path::new("."));
    let input_path = base_dir.join(&plan.input.filename);
    info!("Importing roster: {}", input_path.display());
    let table = data_loader::load_table(&input_path)?;
    let records = SchoolRecord::from_table(&table)?;
    info!("Loaded {} school rows", records.len());

    let generated = generator::generate(&records, &plan.settings, params);
    info!(
        "Generated {} student rows across {} schools using parameter set {}",
        generated.students.len(),
        generated.schools.len(),
        params.key
    );

    let mut rng = rand::thread_rng();

    // Render every profile before writing any file, so one failing exporter
    // cannot leave a partial set of outputs on disk.
    let mut rendered: Vec<(PathBuf, Vec<u8>)> = Vec::new();
    for profile in &plan.export.profiles {
        let table = match profile.table {
            OutputKind::Expanded => output::expanded_roster(&generated),
            OutputKind::Mapped => output::mapped_roster(&generated, &mut rng),
            OutputKind::TeacherCodes => output::teacher_codes(&generated),
        };
        info!(
            "Exporting {} as {:?} to {}",
            table.name, profile.exporter, profile.filename
        );
        let bytes = export::render(&table, &profile.exporter)?;
        rendered.push((base_dir.join(&profile.filename), bytes));
    }

    for (path, bytes) in rendered {
        crate::common::write_bytes_to_file(&path, &bytes)?;
    }

    Ok(())
}
