use crate::models::{Project, PropertyStatus, PropertyType};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// One line of session input
#[derive(Parser, Debug)]
#[command(name = "terranova", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the featured projects
    Home,
    /// List projects matching the current filters
    List,
    /// Change one filter; omit the value to clear that filter
    Set {
        field: FilterField,
        value: Option<String>,
    },
    /// Reset all filters
    Clear,
    /// Cities available for the city filter
    Cities,
    /// Project details by slug
    Show { slug: String },
    /// Resolve a site path, e.g. /projects or /admin
    Open { path: String },
    /// Send an inquiry about a project
    Inquire {
        slug: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Admin login
    Login { password: String },
    Logout,
    /// Manage projects and read inquiries (requires login)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// All projects with their ids
    List,
    /// Received inquiries, newest first
    Inquiries,
    /// Create a project
    Add(ProjectArgs),
    /// Replace fields of an existing project
    Edit {
        id: String,
        #[command(flatten)]
        fields: ProjectArgs,
    },
    /// Delete a project; asks for confirmation unless --yes
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    City,
    Type,
    Min,
    Max,
}

/// Editable project fields; unset flags leave the field as it is
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long = "type", value_parser = parse_property_type)]
    pub property_type: Option<PropertyType>,
    #[arg(long)]
    pub price: Option<u64>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,
    #[arg(long)]
    pub thumbnail: Option<String>,
    /// Repeat to give several; replaces the image list
    #[arg(long = "image")]
    pub images: Vec<String>,
    #[arg(long = "short")]
    pub short_description: Option<String>,
    #[arg(long = "long")]
    pub long_description: Option<String>,
    /// Repeat to give several; replaces the amenity list
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
    #[arg(long, value_parser = parse_property_status)]
    pub status: Option<PropertyStatus>,
    #[arg(long = "brochure")]
    pub brochure_url: Option<String>,
}

impl ProjectArgs {
    pub fn apply(self, project: &mut Project) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.slug {
            project.slug = v;
        }
        if let Some(v) = self.property_type {
            project.property_type = v;
        }
        if let Some(v) = self.price {
            project.price = v;
        }
        if let Some(v) = self.city {
            project.city = v;
        }
        if let Some(v) = self.state {
            project.state = v;
        }
        if let Some(v) = self.lat {
            project.location.lat = v;
        }
        if let Some(v) = self.lng {
            project.location.lng = v;
        }
        if let Some(v) = self.thumbnail {
            project.thumbnail = v;
        }
        if !self.images.is_empty() {
            project.images = self.images;
        }
        if let Some(v) = self.short_description {
            project.short_description = v;
        }
        if let Some(v) = self.long_description {
            project.long_description = v;
        }
        if !self.amenities.is_empty() {
            project.amenities = self.amenities;
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = self.brochure_url {
            project.brochure_url = (!v.is_empty()).then_some(v);
        }
    }
}

fn parse_property_type(value: &str) -> Result<PropertyType, String> {
    PropertyType::parse(value).ok_or_else(|| format!("expected plot, villa or resort, got '{value}'"))
}

fn parse_property_status(value: &str) -> Result<PropertyStatus, String> {
    PropertyStatus::parse(value).ok_or_else(|| format!("expected available or sold, got '{value}'"))
}

/// Split an input line into words, honouring single/double quotes and backslash escapes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
