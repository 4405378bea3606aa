pub mod commands;
pub mod views;

use crate::auth::AuthGate;
use crate::catalogue::{
    available_cities, filter_projects, DeleteOutcome, FilterState, ProjectStore, UpdateOutcome,
};
use crate::inquiry::{InquiryForm, InquiryLog};
use crate::models::Project;
use crate::routes::{self, View};
use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{AdminAction, Command, FilterField, Line};
use tracing::debug;

/// What the driver should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(String),
    Quit,
}

#[derive(Debug)]
struct PendingDelete {
    id: String,
}

/// Everything one run of the site holds in memory
#[derive(Debug)]
pub struct Session {
    store: ProjectStore,
    inquiries: InquiryLog,
    auth: AuthGate,
    filters: FilterState,
    pending_delete: Option<PendingDelete>,
}

impl Session {
    pub fn new(store: ProjectStore, auth: AuthGate) -> Self {
        Self {
            store,
            inquiries: InquiryLog::new(),
            auth,
            filters: FilterState::default(),
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn inquiries(&self) -> &InquiryLog {
        &self.inquiries
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Run one input line. Failures become output; the session keeps going.
    pub fn handle_line(&mut self, line: &str) -> Step {
        if let Some(pending) = self.pending_delete.take() {
            if matches!(line.trim(), "quit" | "exit") {
                return Step::Quit;
            }
            return Step::Output(self.answer_delete(&pending, line));
        }

        let words = match commands::split_words(line) {
            Ok(words) if words.is_empty() => return Step::Output(String::new()),
            Ok(words) => words,
            Err(e) => return Step::Output(format!("error: {e}\n")),
        };

        let command = match Line::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => return Step::Output(e.render().to_string()),
        };

        if matches!(command, Command::Quit) {
            return Step::Quit;
        }

        match self.execute(command) {
            Ok(text) => Step::Output(text),
            Err(e) => Step::Output(format!("error: {e:#}\n")),
        }
    }

    fn execute(&mut self, command: Command) -> Result<String> {
        debug!("Executing {:?}", command);
        match command {
            Command::Home => Ok(self.render(View::Home)),
            Command::List => Ok(self.render(View::Listing)),
            Command::Set { field, value } => {
                self.set_filter(field, value.unwrap_or_default())?;
                Ok(self.render(View::Listing))
            }
            Command::Clear => {
                self.filters.clear();
                Ok(self.render(View::Listing))
            }
            Command::Cities => Ok(views::cities(&available_cities(self.store.all()))),
            Command::Show { slug } => Ok(self.open(&format!("/projects/{slug}"))),
            Command::Open { path } => Ok(self.open(&path)),
            Command::Inquire {
                slug,
                name,
                phone,
                email,
                message,
            } => self.inquire(&slug, InquiryForm { name, phone, email, message }),
            Command::Login { password } => {
                self.auth.login(&password)?;
                Ok(self.open("/admin"))
            }
            Command::Logout => {
                self.auth.logout()?;
                Ok(self.open(routes::LOGIN_PATH))
            }
            Command::Admin { action } => self.admin(action),
            Command::Quit => Ok(String::new()),
        }
    }

    fn set_filter(&mut self, field: FilterField, value: String) -> Result<()> {
        match field {
            FilterField::Search => self.filters.search = value,
            FilterField::City => self.filters.city = value,
            FilterField::Type => self.filters.property_type = value,
            FilterField::Min => {
                self.filters.min_price = parse_price(&value, 0)?;
            }
            FilterField::Max => {
                self.filters.max_price = parse_price(&value, FilterState::default().max_price)?;
            }
        }
        Ok(())
    }

    fn inquire(&mut self, slug: &str, form: InquiryForm) -> Result<String> {
        let project = self
            .store
            .find_by_slug(slug)
            .with_context(|| format!("no project with slug '{slug}'"))?;
        let inquiry = self.inquiries.submit(form, project)?;
        Ok(format!(
            "Thank You! We will contact you shortly about {}.\n",
            inquiry.project_title.as_deref().unwrap_or("this project")
        ))
    }

    fn admin(&mut self, action: AdminAction) -> Result<String> {
        if !self.auth.is_authenticated() {
            return Ok(self.open("/admin"));
        }

        match action {
            AdminAction::List => Ok(views::admin_projects(self.store.all())),
            AdminAction::Inquiries => Ok(views::admin_inquiries(self.inquiries.all())),
            AdminAction::Add(fields) => {
                let mut draft = Project::draft();
                fields.apply(&mut draft);
                let created = self.store.create(draft)?;
                Ok(format!("Created {} with id {}\n", created.slug, created.id))
            }
            AdminAction::Edit { id, fields } => {
                let Some(existing) = self.store.find_by_id(&id) else {
                    bail!("no project with id '{id}'");
                };
                let mut record = existing.clone();
                fields.apply(&mut record);
                match self.store.update(&id, record)? {
                    UpdateOutcome::Updated => Ok(format!("Updated {id}\n")),
                    UpdateOutcome::NotFound => bail!("no project with id '{id}'"),
                }
            }
            AdminAction::Delete { id, yes: true } => {
                Ok(describe_delete(&id, self.store.delete(&id, &mut |_: &str| true)))
            }
            AdminAction::Delete { id, yes: false } => {
                let Some(project) = self.store.find_by_id(&id) else {
                    bail!("no project with id '{id}'");
                };
                let prompt = format!(
                    "Are you sure you want to delete '{}'? [y/N]\n",
                    project.title
                );
                self.pending_delete = Some(PendingDelete { id });
                Ok(prompt)
            }
        }
    }

    fn answer_delete(&mut self, pending: &PendingDelete, answer: &str) -> String {
        let accepted = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
        describe_delete(
            &pending.id,
            self.store.delete(&pending.id, &mut |_: &str| accepted),
        )
    }

    fn open(&self, path: &str) -> String {
        let view = routes::resolve(path, &self.store, &self.auth);
        match view {
            View::Redirect(target) => {
                let next = routes::resolve(target, &self.store, &self.auth);
                format!("Redirected to {target}\n{}", self.render(next))
            }
            other => self.render(other),
        }
    }

    fn render(&self, view: View) -> String {
        match view {
            View::Home => views::home(self.store.featured()),
            View::Listing => {
                let visible = filter_projects(self.store.all(), &self.filters);
                views::listing(&visible, &self.filters)
            }
            View::Detail(slug) => match self.store.find_by_slug(&slug) {
                Some(project) => views::detail(project),
                None => views::NOT_FOUND.to_string(),
            },
            View::About => views::ABOUT.to_string(),
            View::Contact => views::CONTACT.to_string(),
            View::Login => views::LOGIN.to_string(),
            View::Admin => format!(
                "Dashboard\n{}\n{}",
                views::admin_projects(self.store.all()),
                views::admin_inquiries(self.inquiries.all())
            ),
            View::Redirect(target) => format!("Redirected to {target}\n"),
            View::NotFound => views::NOT_FOUND.to_string(),
        }
    }
}

fn parse_price(value: &str, empty_default: u64) -> Result<u64> {
    let cleaned: String = value.chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return Ok(empty_default);
    }
    cleaned
        .parse::<u64>()
        .with_context(|| format!("'{value}' is not a whole, non-negative price"))
}

fn describe_delete(id: &str, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted(project) => format!("Deleted {} ({})\n", project.title, id),
        DeleteOutcome::Declined => "Delete cancelled\n".to_string(),
        DeleteOutcome::NotFound => format!("No project with id '{id}'\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let project = Project {
            id: "1".to_string(),
            title: "Emerald Hills Estate".to_string(),
            slug: "emerald-hills-estate".to_string(),
            city: "Munnar".to_string(),
            state: "Kerala".to_string(),
            price: 4_500_000,
            ..Project::draft()
        };
        Session::new(ProjectStore::new(vec![project]), AuthGate::in_memory())
    }

    fn output(step: Step) -> String {
        match step {
            Step::Output(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn min_and_max_accept_grouped_digits() {
        let mut s = session();
        output(s.handle_line("set max 1,00,000"));
        assert_eq!(s.filters().max_price, 100_000);
        output(s.handle_line("set max"));
        assert_eq!(s.filters().max_price, FilterState::default().max_price);

        let text = output(s.handle_line("set min -5"));
        assert!(text.starts_with("error:"), "{text}");
        assert_eq!(s.filters().min_price, 0);
    }

    #[test]
    fn pending_delete_consumes_next_line() {
        let mut s = session();
        output(s.handle_line("login admin123"));

        let prompt = output(s.handle_line("admin delete 1"));
        assert!(prompt.contains("Are you sure"));
        let reply = output(s.handle_line("no"));
        assert_eq!(reply, "Delete cancelled\n");
        assert_eq!(s.store().len(), 1);

        output(s.handle_line("admin delete 1"));
        output(s.handle_line("YES"));
        assert!(s.store().is_empty());
    }

    #[test]
    fn quit_while_delete_pending_ends_session() {
        let mut s = session();
        output(s.handle_line("login admin123"));
        output(s.handle_line("admin delete 1"));

        assert_eq!(s.handle_line("quit"), Step::Quit);
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn quit_and_blank_lines() {
        let mut s = session();
        assert_eq!(s.handle_line("   "), Step::Output(String::new()));
        assert_eq!(s.handle_line("exit"), Step::Quit);
    }

    #[test]
    fn parse_errors_are_reported() {
        let mut s = session();
        let text = output(s.handle_line("frobnicate"));
        assert!(text.contains("error"), "{text}");
    }
}
