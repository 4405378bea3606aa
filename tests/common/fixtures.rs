use terranova::catalogue::ProjectStore;
use terranova::{AuthGate, Project, PropertyType, Session, Step};

/// Creates a project with the fields the filter engine looks at.
pub fn make_project(title: &str, city: &str, property_type: PropertyType, price: u64) -> Project {
    let slug = terranova::catalogue::slugify(title);
    Project {
        id: slug.clone(),
        title: title.to_string(),
        slug,
        property_type,
        price,
        city: city.to_string(),
        state: "Maharashtra".to_string(),
        ..Project::draft()
    }
}

/// The two-project collection used by the end-to-end filter scenario.
pub fn emerald_and_serenity() -> Vec<Project> {
    vec![
        make_project("Emerald Hills Estate", "Munnar", PropertyType::Villa, 4_500_000),
        make_project("Serenity Lake Plots", "Lonavala", PropertyType::Plot, 2_500_000),
    ]
}

/// Session over the given projects with an in-memory login.
pub fn make_session(projects: Vec<Project>) -> Session {
    Session::new(ProjectStore::new(projects), AuthGate::in_memory())
}

/// Runs a line and returns its output, failing the test on `quit`.
pub fn run(session: &mut Session, line: &str) -> String {
    match session.handle_line(line) {
        Step::Output(text) => text,
        Step::Quit => panic!("session quit on {line:?}"),
    }
}
