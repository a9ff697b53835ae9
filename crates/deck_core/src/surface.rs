/// A container that batch results are rendered into.
///
/// Implementations replace their whole content on each call; there is no way
/// to append a single item.
pub trait RenderSurface<T> {
    fn replace_all(&mut self, items: Vec<T>);
    fn show_fallback(&mut self, message: &str);
}

/// Content of one page region across a render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRegion<T> {
    Empty,
    Loading,
    Items(Vec<T>),
    Fallback(String),
}

impl<T> Default for ContentRegion<T> {
    fn default() -> Self {
        ContentRegion::Empty
    }
}

impl<T> ContentRegion<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ContentRegion::Items(items) => items,
            _ => &[],
        }
    }

    pub fn fallback(&self) -> Option<&str> {
        match self {
            ContentRegion::Fallback(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentRegion::Loading)
    }

    pub fn begin_loading(&mut self) {
        *self = ContentRegion::Loading;
    }
}

impl<T> RenderSurface<T> for ContentRegion<T> {
    fn replace_all(&mut self, items: Vec<T>) {
        *self = ContentRegion::Items(items);
    }

    fn show_fallback(&mut self, message: &str) {
        *self = ContentRegion::Fallback(message.to_string());
    }
}
