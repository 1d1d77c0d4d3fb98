//! The interface through which a host hands outlines over.

use crate::path::{CompoundPath, Path, PathItem};

/// Something that can enumerate simple paths.
///
/// Compound paths contribute each of their sub-paths independently, in order.
/// Hosts implement this for their own document model; the implementations
/// below cover the in-memory types of this crate.
pub trait PathSource {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path));

    /// Collects the simple paths of this source into a vector.
    fn to_paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        self.for_each_path(&mut |path: &Path| paths.push(path.clone()));
        paths
    }
}

impl PathSource for Path {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        callback(self);
    }
}

impl PathSource for CompoundPath {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        for path in &self.paths {
            callback(path);
        }
    }
}

impl PathSource for PathItem {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        match self {
            PathItem::Simple(path) => path.for_each_path(callback),
            PathItem::Compound(compound) => compound.for_each_path(callback),
        }
    }
}

impl<T: PathSource> PathSource for [T] {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        for item in self {
            item.for_each_path(callback);
        }
    }
}

impl<T: PathSource> PathSource for Vec<T> {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        self.as_slice().for_each_path(callback);
    }
}

impl<'l, T: PathSource + ?Sized> PathSource for &'l T {
    fn for_each_path(&self, callback: &mut dyn FnMut(&Path)) {
        (**self).for_each_path(callback);
    }
}

#[cfg(test)]
use crate::{math::point, Anchor};

#[test]
fn compound_items_are_flattened() {
    let a = Path::new(vec![Anchor::corner(point(0.0, 0.0))], false);
    let b = Path::new(vec![Anchor::corner(point(1.0, 0.0))], false);
    let c = Path::new(vec![Anchor::corner(point(2.0, 0.0))], true);

    let selection = vec![
        PathItem::Simple(a.clone()),
        PathItem::Compound(CompoundPath::new(vec![b.clone(), c.clone()])),
    ];

    assert_eq!(selection.to_paths(), vec![a, b, c]);
}
