//! Handle-indexed triangle storage for [`super::Delaunay`].

/// An index into a [`super::Delaunay`]'s face pool. Opaque to keep the pool
/// free to compact without invalidating client code that only ever holds
/// handles returned by the triangulation itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub(super) usize);

/// One triangle of the triangulation: three point indices in
/// counter-clockwise order, and the (up to three) neighbouring faces across
/// each edge.
///
/// `verts[i]` is opposite the edge `(verts[(i+1)%3], verts[(i+2)%3])`, and
/// `nbrs[i]` is the face across that same edge (`None` at the outer
/// boundary of the triangulation — which never happens here, since every
/// input point is enclosed by the three synthetic super-triangle corners).
///
/// `bucket` holds the indices (into the triangulation's point list) of every
/// not-yet-inserted point currently known to fall inside this face, kept in
/// ascending order. Point location during insertion never walks the face
/// graph: a point's containing face is read straight out of its bucket
/// membership, which insertion keeps current by redistributing a face's
/// bucket into its children whenever that face is split or flipped.
#[derive(Clone, Debug)]
pub struct Face {
    pub verts: [usize; 3],
    pub nbrs: [Option<FaceId>; 3],
    pub bucket: Vec<usize>,
    pub alive: bool,
}

impl Face {
    pub fn new(verts: [usize; 3], nbrs: [Option<FaceId>; 3]) -> Self {
        Self { verts, nbrs, bucket: Vec::new(), alive: true }
    }

    /// The index, within `0..3`, at which `verts` holds `vertex`.
    pub fn index_of(&self, vertex: usize) -> Option<usize> {
        self.verts.iter().position(|&v| v == vertex)
    }

    /// The index, within `0..3`, at which `nbrs` holds `Some(face)`.
    pub fn neighbour_index(&self, face: FaceId) -> Option<usize> {
        self.nbrs.iter().position(|n| *n == Some(face))
    }
}
