use ::std::borrow::Borrow;
use ::std::cmp::Ordering;

use crate::name::Name;

/// Orders names by surname, then by the space-joined given names.
///
/// Both keys use plain `str` ordering, which is case-sensitive and
/// byte-wise over UTF-8, so `"Zed"` sorts before `"adams"`.
pub fn compare_names(a: &Name, b: &Name) -> Ordering {
    a.surname()
        .cmp(b.surname())
        .then_with(|| a.joined_given_names().cmp(&b.joined_given_names()))
}

/// Returns a sorted copy of `names`, leaving the input untouched.
///
/// Works on owned names as well as references (`&[&Name]`). The sort is
/// stable: names with equal keys keep their input order.
pub fn sort_names<N>(names: &[N]) -> Vec<N>
where
    N: Borrow<Name> + Clone,
{
    let mut sorted = names.to_vec();
    sorted.sort_by_cached_key(|name| {
        let name: &Name = name.borrow();
        (name.surname().to_string(), name.joined_given_names())
    });
    sorted
}
