use std::fmt;

use tkn_config::DashboardConfig;
use tkn_config::KubeConfig;
use tkn_resource_client::NameSpace;

/// namespace picked in the header of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamespaceSelection {
    #[default]
    All,
    Named(String),
}

impl NamespaceSelection {
    /// an empty name selects all namespaces
    pub fn named<N: Into<String>>(namespace: N) -> Self {
        Self::from(Some(namespace.into()))
    }

    /// selection on start, from settings and kubeconfig
    pub fn initial(config: &DashboardConfig, kube: Option<&KubeConfig>) -> Self {
        config.initial_namespace(kube).into()
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(namespace) => Some(namespace),
        }
    }
}

impl From<Option<String>> for NamespaceSelection {
    fn from(namespace: Option<String>) -> Self {
        match namespace {
            Some(namespace) if !namespace.is_empty() => Self::Named(namespace),
            _ => Self::All,
        }
    }
}

impl From<&NamespaceSelection> for NameSpace {
    fn from(selection: &NamespaceSelection) -> Self {
        match selection {
            NamespaceSelection::All => NameSpace::All,
            NamespaceSelection::Named(namespace) => NameSpace::Named(namespace.clone()),
        }
    }
}

impl fmt::Display for NamespaceSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::All => write!(f, "all namespaces"),
            Self::Named(namespace) => write!(f, "{}", namespace),
        }
    }
}

#[cfg(test)]
mod test {

    use tkn_config::DashboardConfig;

    use super::NamespaceSelection;

    #[test]
    fn test_empty_name_selects_all() {
        assert_eq!(NamespaceSelection::from(Some(String::new())), NamespaceSelection::All);
        assert_eq!(NamespaceSelection::from(None), NamespaceSelection::All);
        assert_eq!(NamespaceSelection::named(""), NamespaceSelection::All);
        assert_eq!(
            NamespaceSelection::from(Some("default".to_owned())).as_option(),
            Some("default")
        );
    }

    #[test]
    fn test_initial_from_config() {
        let config = DashboardConfig::default().with_namespace_override(Some("green".to_owned()));
        assert_eq!(
            NamespaceSelection::initial(&config, None),
            NamespaceSelection::named("green")
        );

        let config = DashboardConfig::default().with_namespace_override(Some("*".to_owned()));
        assert_eq!(NamespaceSelection::initial(&config, None), NamespaceSelection::All);
    }
}
