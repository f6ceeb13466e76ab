//! Ability catalog
//!
//! Each ability describes one cache-management operation: its identity,
//! human-facing label, and execution annotations. The catalog is what gets
//! surfaced to hosts (MCP tool listings, `purgekit abilities`).

/// Execution annotations for an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotations {
    pub readonly: bool,
    pub destructive: bool,
    pub idempotent: bool,
}

/// Descriptor for a single ability
#[derive(Debug, Clone)]
pub struct Ability {
    /// Namespaced identifier, e.g. `cloudflare/clear-cache`
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub annotations: Annotations,
}

/// All abilities purgekit exposes
pub fn catalog() -> Vec<Ability> {
    vec![
        Ability {
            name: "cloudflare/clear-cache",
            label: "Clear Cloudflare Cache",
            description: "Purges the Cloudflare cache for the site, either entirely or \
                scoped to specific URLs, cache tags, or hostnames.",
            category: "site",
            annotations: Annotations {
                readonly: false,
                destructive: false,
                idempotent: true,
            },
        },
        Ability {
            name: "cloudflare/zone-info",
            label: "Cloudflare Zone Info",
            description: "Reads status, plan, and name servers of the configured zone.",
            category: "site",
            annotations: Annotations {
                readonly: true,
                destructive: false,
                idempotent: true,
            },
        },
        Ability {
            name: "cloudflare/get-development-mode",
            label: "Get Cloudflare Development Mode",
            description: "Reads whether the zone currently bypasses the Cloudflare cache.",
            category: "site",
            annotations: Annotations {
                readonly: true,
                destructive: false,
                idempotent: true,
            },
        },
        Ability {
            name: "cloudflare/set-development-mode",
            label: "Set Cloudflare Development Mode",
            description: "Turns the cache-bypassing development mode on or off. \
                Cloudflare switches it off automatically after three hours.",
            category: "site",
            annotations: Annotations {
                readonly: false,
                destructive: false,
                idempotent: true,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let abilities = catalog();
        let mut names: Vec<_> = abilities.iter().map(|a| a.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), abilities.len());
    }

    #[test]
    fn test_readonly_abilities_are_marked() {
        for ability in catalog() {
            let expect_readonly = ability.name.contains("zone-info")
                || ability.name.starts_with("cloudflare/get-");
            assert_eq!(ability.annotations.readonly, expect_readonly, "{}", ability.name);
            assert!(ability.annotations.idempotent, "{}", ability.name);
            assert!(!ability.annotations.destructive, "{}", ability.name);
        }
    }
}
