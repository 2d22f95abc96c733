use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// Schema types refer to each other this way (an object type stores the
/// names of the interfaces it implements), and fragment spreads refer to
/// the [`Fragment`](crate::operation::Fragment) they spread the same way so
/// that a fragment's tree is never copied into each spread site.
#[derive(Debug)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            ref_location,
            phantom: PhantomData,
        }
    }

    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

impl<
    TSource,
    TRefLocation: Clone,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> Clone for NamedRef<TSource, TRefLocation, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str(), self.ref_location.clone())
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}

/// Implement this trait for any type that could be referenced by named. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > where Self: Sized {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` exists")]
    DanglingReference(String),
}
