use crate::catalogue::FilterState;
use crate::models::{format_inr, Inquiry, Project};
use std::fmt::Display;

/// Append `text` and a newline
fn line(out: &mut String, text: impl Display) {
    out.push_str(&text.to_string());
    out.push('\n');
}

pub fn project_card(out: &mut String, index: usize, project: &Project) {
    let sold = if project.is_purchasable() { "" } else { " [SOLD]" };
    line(
        out,
        format_args!(
            "{}. {} ({}){}",
            index + 1,
            project.title,
            format_inr(project.price),
            sold
        ),
    );
    line(
        out,
        format_args!(
            "   {} · {}, {} · /projects/{}",
            project.property_type, project.city, project.state, project.slug
        ),
    );
    if !project.short_description.is_empty() {
        line(out, format_args!("   {}", project.short_description));
    }
}

pub fn home(featured: &[Project]) -> String {
    let mut out = String::from("Find Your Sanctuary in Nature\n\nFeatured Projects\n");
    if featured.is_empty() {
        out.push_str("No projects listed yet.\n");
    }
    for (i, project) in featured.iter().enumerate() {
        project_card(&mut out, i, project);
    }
    out
}

pub fn listing(visible: &[&Project], filters: &FilterState) -> String {
    let mut out = String::new();
    line(
        &mut out,
        format_args!("Found {} properties matching your criteria", visible.len()),
    );
    line(&mut out, format_args!("Filters: {}", describe_filters(filters)));
    if visible.is_empty() {
        out.push_str("No properties found. Try `clear` to reset filters.\n");
    }
    for (i, project) in visible.iter().enumerate() {
        project_card(&mut out, i, project);
    }
    out
}

fn describe_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push(format!("search={:?}", filters.search));
    }
    if !filters.city.is_empty() {
        parts.push(format!("city={}", filters.city));
    }
    if !filters.property_type.is_empty() {
        parts.push(format!("type={}", filters.property_type));
    }
    parts.push(format!(
        "price {} - {}",
        format_inr(filters.min_price),
        format_inr(filters.max_price)
    ));
    parts.join(", ")
}

pub fn detail(project: &Project) -> String {
    let mut out = String::new();
    line(
        &mut out,
        format_args!("{} [{}]", project.title, project.status.as_str()),
    );
    line(
        &mut out,
        format_args!(
            "{} in {}, {} ({:.4}, {:.4})",
            project.property_type,
            project.city,
            project.state,
            project.location.lat,
            project.location.lng
        ),
    );
    line(&mut out, format_args!("Price: {}", format_inr(project.price)));
    line(&mut out, format_args!("\n{}", project.long_description));

    if !project.amenities.is_empty() {
        line(
            &mut out,
            format_args!("\nAmenities: {}", project.amenities.join(", ")),
        );
    }
    if !project.key_highlights.is_empty() {
        out.push_str("\nKey highlights:\n");
        for highlight in &project.key_highlights {
            line(&mut out, format_args!(" - {}", highlight.trim()));
        }
    }
    if !project.investment_breakdown.is_empty() {
        out.push_str("\nInvestment breakdown:\n");
        for item in &project.investment_breakdown {
            line(
                &mut out,
                format_args!(" {:<40} {}", item.label, format_inr(item.amount)),
            );
        }
    }
    for model in &project.roi_models {
        line(&mut out, format_args!("\n{} ({})", model.title, model.area));
        for highlight in &model.highlights {
            line(&mut out, format_args!(" - {highlight}"));
        }
        line(&mut out, format_args!(" => {}", model.return_text));
    }

    out.push('\n');
    if project.is_purchasable() {
        match &project.brochure_url {
            Some(_) => line(
                &mut out,
                format_args!(
                    "Brochure: {} (send an inquiry to receive it)",
                    project.brochure_file_name()
                ),
            ),
            None => out.push_str("Brochure not available for this project.\n"),
        }
        line(
            &mut out,
            format_args!(
                "Interested? `inquire {} --name .. --phone .. --email ..`",
                project.slug
            ),
        );
    } else {
        out.push_str("This project is sold out.\n");
    }
    out
}

pub fn cities(cities: &[&str]) -> String {
    let mut out = String::from("All Cities\n");
    for city in cities {
        line(&mut out, format_args!(" - {city}"));
    }
    out
}

pub fn admin_projects(projects: &[Project]) -> String {
    let mut out = String::new();
    line(&mut out, format_args!("Manage Projects ({})", projects.len()));
    for project in projects {
        line(
            &mut out,
            format_args!(
                " {:<16} {:<40} {:<8} {:<10} {}",
                project.id,
                project.title,
                project.property_type,
                project.status.as_str(),
                format_inr(project.price)
            ),
        );
    }
    out
}

pub fn admin_inquiries(inquiries: &[Inquiry]) -> String {
    let mut out = String::new();
    line(&mut out, format_args!("Inquiries ({})", inquiries.len()));
    if inquiries.is_empty() {
        out.push_str("No inquiries yet.\n");
    }
    for inquiry in inquiries {
        line(
            &mut out,
            format_args!(
                " {} · {} · {} <{}> re: {}",
                inquiry.created_at.format("%Y-%m-%d %H:%M"),
                inquiry.name,
                inquiry.phone,
                inquiry.email,
                inquiry.project_title.as_deref().unwrap_or("general")
            ),
        );
        if !inquiry.message.is_empty() {
            line(&mut out, format_args!("   \"{}\"", inquiry.message));
        }
    }
    out
}

pub const ABOUT: &str = "TerraNova Estates curates sustainable land, villa and resort projects across India.\n";
pub const CONTACT: &str = "Reach us through any project's inquiry form, or visit /projects to browse.\n";
pub const LOGIN: &str = "Admin Portal: `login <password>`\n";
pub const NOT_FOUND: &str = "404: the page you are looking for does not exist.\n";
