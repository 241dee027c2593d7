mod crd;
mod metadata;
mod resource;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "pipeline")]
pub mod pipeline;

pub use self::crd::*;
pub use self::metadata::*;
pub use self::resource::*;
pub use self::spec_def::*;

mod spec_def {

    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Deserialize;
    use serde::Serialize;

    use super::Crd;

    pub trait Status:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
        /// resource has no status section
        fn is_absent(&self) -> bool {
            false
        }
    }

    pub trait Header:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
    }

    /// Kubernetes Spec
    pub trait Spec:
        Sized + Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync
    {
        type Status: Status;

        type Header: Header;

        /// if true, spec is namespaced
        const NAME_SPACED: bool = true;

        /// api group, version and names of the resource
        fn metadata() -> &'static Crd;

        fn label() -> &'static str {
            Self::metadata().names.kind
        }

        fn api_version() -> String {
            let metadata = Self::metadata();
            if metadata.group == "core" {
                return metadata.version.to_owned();
            }
            format!("{}/{}", metadata.group, metadata.version)
        }

        fn kind() -> String {
            Self::metadata().names.kind.to_owned()
        }

        /// resource has no spec section, e.g. Secret or ServiceAccount
        fn is_absent(&self) -> bool {
            false
        }
    }

    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
    pub struct DefaultHeader {}

    impl Header for DefaultHeader {}

    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
    pub struct DefaultStatus {}

    impl Status for DefaultStatus {
        fn is_absent(&self) -> bool {
            true
        }
    }
}
