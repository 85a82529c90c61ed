/// A post ready for display and selection: a non-empty title and an
/// absolute link. Only the normalizer constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
}
