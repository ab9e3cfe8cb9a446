//! Catalog report printed by `brickyard --list`

use brickyard_infrastructure::Core;

/// Human-readable listing of the loaded bricks
///
/// One line per brick, then one indented line per service with its
/// configuration file and where it was found.
pub fn catalog_report(core: &Core) -> String {
    let bricks = core.bricks();
    if bricks.is_empty() {
        return "No bricks installed\n".to_string();
    }

    let loader = core.services().configuration();
    let mut report = String::new();
    for brick in bricks {
        report.push_str(&format!(
            "{} ({})\n",
            brick.package_name(),
            brick.package_path().display()
        ));
        for service in brick.services() {
            let line = match service.configuration() {
                None => format!("  {}\n", service.name()),
                Some(_) => {
                    let location = loader
                        .resolve_path(service)
                        .map_or_else(|_| "missing".to_string(), |path| path.display().to_string());
                    format!(
                        "  {} [{}: {}]\n",
                        service.name(),
                        service.configuration_filename(),
                        location
                    )
                }
            };
            report.push_str(&line);
        }
    }
    report
}
