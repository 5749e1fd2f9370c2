use crate::external_object_list::domain::model::value_objects::model_descriptor::ModelDescriptor;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ObjectFilter {
    PrimaryKeyIn(Vec<String>),
}

impl ObjectFilter {
    pub fn accepts(&self, primary_key: &str) -> bool {
        match self {
            Self::PrimaryKeyIn(ids) => ids.iter().any(|id| id == primary_key),
        }
    }
}

/// Lazy description of a collection of model objects.
///
/// Nothing is fetched until an `ObjectRepository` evaluates the descriptor.
/// Filters are conjunctive: each one can only shrink the collection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectQuerySet {
    model: ModelDescriptor,
    filters: Vec<ObjectFilter>,
}

impl ObjectQuerySet {
    pub fn all(model: ModelDescriptor) -> Self {
        Self {
            model,
            filters: Vec::new(),
        }
    }

    pub fn filter_by_pk_in<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.filters
            .push(ObjectFilter::PrimaryKeyIn(ids.into_iter().collect()));
        self
    }

    pub fn model(&self) -> &ModelDescriptor {
        &self.model
    }

    pub fn filters(&self) -> &[ObjectFilter] {
        &self.filters
    }

    pub fn accepts(&self, primary_key: &str) -> bool {
        self.filters.iter().all(|filter| filter.accepts(primary_key))
    }

    /// True when some membership filter has no candidates, so evaluation can
    /// be skipped.
    pub fn is_known_empty(&self) -> bool {
        self.filters.iter().any(|filter| match filter {
            ObjectFilter::PrimaryKeyIn(ids) => ids.is_empty(),
        })
    }
}
