/// Finds the rendered element for a list index.
///
/// Implementations match elements whose `attribute` value equals the
/// stringified index and return `None` when no element or more than one
/// element matches.
pub trait ElementLocator {
    type Element;

    fn locate(&self, attribute: &str, index: usize) -> Option<Self::Element>;
}

impl<L: ElementLocator + ?Sized> ElementLocator for &L {
    type Element = L::Element;

    fn locate(&self, attribute: &str, index: usize) -> Option<Self::Element> {
        (**self).locate(attribute, index)
    }
}
