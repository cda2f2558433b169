use crate::{
    canonical::canonic_tag,
    context::{Context, Lookup},
    matching::extended_match,
    resolve::Pool,
};
use std::sync::Arc;

/// The language-tag engine.
///
/// Build one (optionally with lookup hooks), then use it from any thread:
/// every operation is a pure function over its inputs plus the immutable
/// hook set.
///
/// ```
/// use taggy::Taggy;
///
/// let taggy = Taggy::default();
/// assert_eq!(taggy.canonicalize("en-us", true).as_deref(), Some("en-US"));
/// assert!(taggy.matches("en-GB", "en"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Taggy {
    ctx: Context,
}

impl Taggy {
    pub fn builder() -> TaggyBuilder {
        TaggyBuilder::default()
    }

    /// Canonical spelling of `tag`, or `None` when it has none. With
    /// `full = false` only the first unit is canonicalized.
    pub fn canonicalize(&self, tag: &str, full: bool) -> Option<String> {
        canonic_tag(tag, full, &self.ctx).ok()
    }

    /// The language portion of `tag` (the first unit, or a whole irregular
    /// spelling), or `None` when `tag` is not a language tag at all.
    pub fn extract(&self, tag: &str) -> Option<String> {
        self.canonicalize(tag, false)
    }

    /// RFC 4647 extended-range predicate over the raw, non-canonicalized
    /// pair. Also available as the free function
    /// [`extended_match`](crate::matching::extended_match).
    pub fn matches(&self, tag: &str, range: &str) -> bool {
        extended_match(tag, range)
    }

    /// Group `items` by canonical tag for (repeated) [`Self::resolve_pool`]
    /// calls. `None` tags go to the pool's default group.
    pub fn pool<I, T>(&self, items: impl IntoIterator<Item = (I, Option<T>)>) -> Pool<I>
    where
        T: AsRef<str>,
    {
        let mut pool = Pool::new();
        for (item, tag) in items {
            pool.insert(item, tag.as_ref().map(|t| t.as_ref()), &self.ctx);
        }
        pool
    }

    /// One-shot accept-language negotiation: the subset of `items` whose
    /// shared canonical tag best satisfies `range_list`, or the untagged
    /// leftovers when nothing matches.
    pub fn resolve<I, T>(
        &self,
        range_list: &str,
        items: impl IntoIterator<Item = (I, Option<T>)>,
    ) -> Vec<I>
    where
        T: AsRef<str>,
    {
        let mut pool = self.pool(items);
        self.resolve_pool(range_list, &mut pool)
    }

    /// Resolve against an existing pool, consuming the winning group so a
    /// later call can never hand it out again.
    pub fn resolve_pool<I>(&self, range_list: &str, pool: &mut Pool<I>) -> Vec<I> {
        pool.take(range_list, &self.ctx)
    }
}

/// Configures the two optional lookup hooks.
#[derive(Default)]
pub struct TaggyBuilder {
    canonical: Option<Lookup>,
    un_region: Option<Lookup>,
}

impl TaggyBuilder {
    /// Install an "extra canonical name" lookup, consulted for the first
    /// unit of every tag before the syntactic rules run. Its result is
    /// emitted verbatim.
    pub fn canonical_lookup<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.canonical = Some(Arc::new(f));
        self
    }

    /// Install a numeric-region lookup, consulted for every 3-digit region
    /// subtag during full canonicalization.
    pub fn un_region_lookup<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.un_region = Some(Arc::new(f));
        self
    }

    /// Shortcut for the built-in RFC 4646 preferred-value table.
    pub fn with_preferred_values(self) -> Self {
        self.canonical_lookup(crate::lookup::preferred_value)
    }

    /// Shortcut for the built-in UN M.49 → ISO 3166 region table.
    pub fn with_un_regions(self) -> Self {
        self.un_region_lookup(crate::lookup::un_m49_region)
    }

    pub fn build(self) -> Taggy {
        Taggy {
            ctx: Context {
                canonical: self.canonical,
                un_region: self.un_region,
            },
        }
    }
}
