use crate::model::Declaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorVerdict {
    /// Not public and no public constructor declared before it.
    NoPublic,
    /// Public, but another public constructor takes more parameters.
    Unused,
    /// Public, and shares the largest parameter count with another.
    Ambiguous,
}

/// Arbitrates a type's constructors, scanned in declaration order.
///
/// A public constructor clears every non-public constructor seen before it,
/// so only non-public constructors preceding all public ones survive as
/// [`ConstructorVerdict::NoPublic`]; the scan is order sensitive. When
/// `check_selection` is set, public constructors are then ranked by parameter
/// count the way a runtime picks one.
pub fn arbitrate_constructors<'a, I>(constructors: I, check_selection: bool) -> Vec<(&'a Declaration, ConstructorVerdict)>
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let mut has_public = false;
    let mut non_public: Vec<&Declaration> = Vec::new();
    let mut public: Vec<(&Declaration, usize)> = Vec::new();

    for ctor in constructors {
        if ctor.modifiers.is_public() {
            has_public = true;
            non_public.clear();
            let count = ctor.as_method().map_or(0, |m| m.parameters.len());
            public.push((ctor, count));
        } else if !has_public {
            non_public.push(ctor);
        }
    }

    let mut verdicts: Vec<(&Declaration, ConstructorVerdict)> = non_public
        .into_iter()
        .map(|c| (c, ConstructorVerdict::NoPublic))
        .collect();

    if check_selection {
        if let Some(max) = public.iter().map(|(_, n)| *n).max() {
            let at_max = public.iter().filter(|(_, n)| *n == max).count();
            for (ctor, count) in &public {
                if *count < max {
                    verdicts.push((ctor, ConstructorVerdict::Unused));
                } else if at_max > 1 {
                    verdicts.push((ctor, ConstructorVerdict::Ambiguous));
                }
            }
        }
    }
    verdicts
}
