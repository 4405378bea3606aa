use crate::models::Project;
use tracing::debug;

/// Upper price bound the listing starts with (₹1 crore)
pub const DEFAULT_MAX_PRICE: u64 = 10_000_000;

/// Listing search constraints chosen by the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Exact city match; empty means unconstrained
    pub city: String,
    /// Exact type wire name; empty means unconstrained
    pub property_type: String,
    pub min_price: u64,
    pub max_price: u64,
    /// Case-insensitive substring of title or city
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            city: String::new(),
            property_type: String::new(),
            min_price: 0,
            max_price: DEFAULT_MAX_PRICE,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Reset every constraint to its inactive default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn matches(&self, project: &Project, needle: Option<&str>) -> bool {
        if let Some(q) = needle {
            let hit = project.title.to_lowercase().contains(q)
                || project.city.to_lowercase().contains(q);
            if !hit {
                return false;
            }
        }

        if !self.city.is_empty() && project.city != self.city {
            return false;
        }

        if !self.property_type.is_empty() && project.property_type.as_str() != self.property_type {
            return false;
        }

        self.min_price <= project.price && project.price <= self.max_price
    }
}

/// Visible subset of `projects` under `state`, in input order.
///
/// Every active predicate must hold. An inverted price range simply matches
/// nothing.
pub fn filter_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let needle = (!state.search.is_empty()).then(|| state.search.to_lowercase());

    let visible: Vec<&Project> = projects
        .iter()
        .filter(|p| state.matches(p, needle.as_deref()))
        .collect();

    debug!(
        "Filtered {} of {} projects (search={:?}, city={:?}, type={:?}, price={}..={})",
        visible.len(),
        projects.len(),
        state.search,
        state.city,
        state.property_type,
        state.min_price,
        state.max_price
    );

    visible
}

/// Distinct cities in order of first appearance
pub fn available_cities(projects: &[Project]) -> Vec<&str> {
    let mut cities: Vec<&str> = Vec::new();
    for project in projects {
        if !cities.contains(&project.city.as_str()) {
            cities.push(&project.city);
        }
    }
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    fn project(title: &str, city: &str, property_type: PropertyType, price: u64) -> Project {
        Project {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            property_type,
            price,
            city: city.to_string(),
            ..Project::draft()
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("Emerald Hills Estate", "Munnar", PropertyType::Villa, 4_500_000),
            project("Serenity Lake Plots", "Lonavala", PropertyType::Plot, 2_500_000),
            project("Green Valley Farms", "Coorg", PropertyType::Plot, 3_500_000),
        ]
    }

    fn titles<'a>(visible: &[&'a Project]) -> Vec<&'a str> {
        visible.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn default_state_is_identity() {
        let projects = sample();
        let visible = filter_projects(&projects, &FilterState::default());
        assert_eq!(visible.len(), projects.len());
        for (shown, original) in visible.iter().zip(&projects) {
            assert_eq!(*shown, original);
        }
    }

    #[test]
    fn empty_collection_yields_empty_result() {
        assert!(filter_projects(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_title() {
        let projects = sample();
        for q in ["emerald", "EMERALD", "Hills"] {
            let state = FilterState { search: q.to_string(), ..FilterState::default() };
            assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Emerald Hills Estate"]);
        }
    }

    #[test]
    fn search_also_matches_city() {
        let projects = sample();
        let state = FilterState { search: "lonav".to_string(), ..FilterState::default() };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Serenity Lake Plots"]);
    }

    #[test]
    fn city_filter_is_exact() {
        let projects = sample();
        let state = FilterState { city: "coorg".to_string(), ..FilterState::default() };
        assert!(filter_projects(&projects, &state).is_empty());

        let state = FilterState { city: "Coorg".to_string(), ..FilterState::default() };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Green Valley Farms"]);
    }

    #[test]
    fn predicates_compose_by_and() {
        let projects = sample();
        let state = FilterState {
            search: "farms".to_string(),
            city: "Coorg".to_string(),
            property_type: "plot".to_string(),
            min_price: 3_000_000,
            max_price: 4_000_000,
        };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Green Valley Farms"]);

        // Each variant breaks exactly one predicate
        let breaks = [
            FilterState { search: "lake".to_string(), ..state.clone() },
            FilterState { city: "Munnar".to_string(), ..state.clone() },
            FilterState { property_type: "villa".to_string(), ..state.clone() },
            FilterState { max_price: 3_499_999, ..state.clone() },
        ];
        for broken in breaks {
            assert!(filter_projects(&projects, &broken).is_empty(), "{broken:?}");
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let projects = sample();
        let exact = FilterState { min_price: 2_500_000, max_price: 2_500_000, ..FilterState::default() };
        assert_eq!(titles(&filter_projects(&projects, &exact)), vec!["Serenity Lake Plots"]);

        let above = FilterState { min_price: 2_500_001, max_price: 3_499_999, ..FilterState::default() };
        assert!(filter_projects(&projects, &above).is_empty());
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let projects = sample();
        let state = FilterState { min_price: 5_000_000, max_price: 1_000_000, ..FilterState::default() };
        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn unknown_type_matches_nothing() {
        let projects = sample();
        let state = FilterState { property_type: "castle".to_string(), ..FilterState::default() };
        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn clear_restores_defaults() {
        let mut state = FilterState {
            search: "x".to_string(),
            city: "y".to_string(),
            property_type: "plot".to_string(),
            min_price: 1,
            max_price: 2,
        };
        state.clear();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn cities_are_distinct_in_first_appearance_order() {
        let mut projects = sample();
        projects.push(project("Tea Garden Villas", "Munnar", PropertyType::Villa, 1));
        assert_eq!(available_cities(&projects), vec!["Munnar", "Lonavala", "Coorg"]);
    }
}
