//! Incremental randomized Delaunay triangulation.

use crate::adaptive::AdaptiveInt;
use crate::point::{ccw, is_in_circumcircle, Orientation, Point};

use super::face::{Face, FaceId};

/// Splitmix64, used only to produce a deterministic insertion-order shuffle
/// for [`Delaunay::triangulate_shuffled`]. Randomizing insertion order keeps
/// the expected number of points redistributed per split logarithmic
/// instead of quadratic for already-sorted input.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// An incremental Delaunay triangulation over a fixed point set.
///
/// Construction wraps the input in a synthetic super-triangle whose corners
/// sit at `+-2^(n-1)` along the axes (`n` being the input coordinates' bit
/// budget), so every real point is strictly enclosed and no face ever needs
/// a `None` neighbour to represent "outside". Point location during
/// insertion never walks the face graph: each not-yet-inserted point is
/// kept in the `bucket` of whichever face currently contains it (tracked in
/// `vertex_location`), and insertion redistributes a face's bucket into its
/// children whenever that face is split or has an edge flipped under it.
pub struct Delaunay {
    points: Vec<Point>,
    faces: Vec<Face>,
    super_count: usize,
    bits: usize,
    vertex_location: Vec<FaceId>,
}

impl Delaunay {
    /// Triangulates `points` in the order given.
    pub fn triangulate(points: &[Point]) -> Self {
        Self::build(points.to_vec())
    }

    /// Triangulates `points` after a deterministic splitmix64-seeded
    /// shuffle of insertion order, which avoids the worst-case behaviour a
    /// pathological (e.g. already sorted) input order can cause for bucket
    /// redistribution.
    pub fn triangulate_shuffled(points: &[Point], seed: u64) -> Self {
        let mut order: Vec<Point> = points.to_vec();
        let mut state = seed;
        for i in (1..order.len()).rev() {
            let r = (splitmix64(&mut state) % (i as u64 + 1)) as usize;
            order.swap(i, r);
        }
        Self::build(order)
    }

    fn build(input: Vec<Point>) -> Self {
        assert!(!input.is_empty(), "cannot triangulate an empty point set");
        let bits = input[0].x.bits().max(input[0].y.bits());
        let n = input.len();

        let inf = AdaptiveInt::new(1, 2).shl(bits.saturating_sub(1));
        let zero = AdaptiveInt::new(0, 1);
        let neg_inf = inf.negate();

        // inf_n, inf_sw, inf_se: a counter-clockwise super-triangle large
        // enough to strictly enclose every point representable in `bits`
        // bits, regardless of where those points actually fall.
        let inf_n = Point::from_coords(zero, inf.clone());
        let inf_sw = Point::from_coords(neg_inf.clone(), neg_inf.clone());
        let inf_se = Point::from_coords(inf, neg_inf);

        let super_count = 3;
        let mut points = vec![inf_n, inf_sw, inf_se];
        points.extend(input);

        let initial_bucket: Vec<usize> = (super_count..points.len()).collect();
        let mut initial_face = Face::new([0, 1, 2], [None, None, None]);
        initial_face.bucket = initial_bucket;

        let vertex_location = vec![FaceId(0); points.len()];

        let mut me =
            Self { points, faces: vec![initial_face], super_count, bits, vertex_location };

        for i in 0..n {
            let idx = super_count + i;
            let place = me.vertex_location[idx];
            let new_faces = me.split(place, idx);
            for f in new_faces {
                me.check_flip(f, 0);
            }
        }
        me.compact();
        me
    }

    fn is_infinite_point(&self, idx: usize) -> bool {
        idx < self.super_count
    }

    fn push_face(&mut self, face: Face) -> FaceId {
        self.faces.push(face);
        FaceId(self.faces.len() - 1)
    }

    fn relink(&mut self, target: Option<FaceId>, from: FaceId, to: FaceId) {
        if let Some(t) = target {
            if let Some(idx) = self.faces[t.0].neighbour_index(from) {
                self.faces[t.0].nbrs[idx] = Some(to);
            }
        }
    }

    /// Records that `face`'s bucket's smallest index (the next point due
    /// for insertion out of that bucket, since buckets stay sorted and
    /// insertion proceeds index-by-index) is located in `face`.
    fn link_bucket(&mut self, face: FaceId) {
        if let Some(&front) = self.faces[face.0].bucket.first() {
            self.vertex_location[front] = face;
        }
    }

    /// Replaces the triangle at `old` with three triangles fanning out from
    /// the newly inserted vertex `p`, redistributing `old`'s bucket (minus
    /// `p` itself) among the three children by which one's two edges
    /// touching `p` both have the leftover point on their inner side.
    fn split(&mut self, old: FaceId, p: usize) -> [FaceId; 3] {
        let face = self.faces[old.0].clone();
        self.faces[old.0].alive = false;
        let v = face.verts;
        let n = face.nbrs;

        debug_assert_eq!(face.bucket.first().copied(), Some(p));
        let leftover = &face.bucket[1..];

        let mut child_verts = [[0usize; 3]; 3];
        for (k, slot) in child_verts.iter_mut().enumerate() {
            *slot = [p, v[(k + 1) % 3], v[(k + 2) % 3]];
        }

        let mut child_buckets: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for &e in leftover {
            let mut assigned = 2;
            for (k, &[pp, a, b]) in child_verts.iter().enumerate() {
                let inside_pa = ccw(&self.points[pp], &self.points[a], &self.points[e])
                    != Orientation::Clockwise;
                let inside_bp = ccw(&self.points[b], &self.points[pp], &self.points[e])
                    != Orientation::Clockwise;
                if inside_pa && inside_bp {
                    assigned = k;
                    break;
                }
            }
            child_buckets[assigned].push(e);
        }

        let next_id = self.faces.len();
        let ids = [FaceId(next_id), FaceId(next_id + 1), FaceId(next_id + 2)];
        for k in 0..3 {
            let [pp, a, b] = child_verts[k];
            let mut child =
                Face::new([pp, a, b], [n[k], Some(ids[(k + 1) % 3]), Some(ids[(k + 2) % 3])]);
            child.bucket = std::mem::take(&mut child_buckets[k]);
            self.push_face(child);
        }
        for k in 0..3 {
            self.relink(n[k], old, ids[k]);
        }
        for &id in &ids {
            self.link_bucket(id);
        }
        ids
    }

    /// Whether the edge opposite `p` in a face `(p, u, w)` needs flipping
    /// against the opposite face's far corner `d`. Handles the three
    /// synthetic super-triangle corners as points at infinity (an infinite
    /// corner degenerates the in-circle test to a `ccw` test against the
    /// remaining finite edge) and a degenerate (collinear) face by summing
    /// the three `ccw` signs against `d` instead of calling
    /// [`is_in_circumcircle`] on a zero-area triangle.
    fn has_to_flip(&self, p: usize, u: usize, w: usize, d: usize) -> bool {
        let pts = &self.points;
        if self.is_infinite_point(p) {
            return ccw(&pts[u], &pts[w], &pts[d]) == Orientation::CounterClockwise;
        }
        if self.is_infinite_point(u) {
            return ccw(&pts[w], &pts[p], &pts[d]) == Orientation::CounterClockwise;
        }
        if self.is_infinite_point(w) {
            return ccw(&pts[p], &pts[u], &pts[d]) == Orientation::CounterClockwise;
        }
        if ccw(&pts[p], &pts[u], &pts[w]) == Orientation::Collinear {
            let sum = ccw(&pts[p], &pts[u], &pts[d]).sign()
                + ccw(&pts[u], &pts[w], &pts[d]).sign()
                + ccw(&pts[w], &pts[p], &pts[d]).sign();
            return sum > 0;
        }
        if self.is_infinite_point(d) {
            return false;
        }
        is_in_circumcircle(&pts[p], &pts[u], &pts[w], &pts[d]) > 0
    }

    /// If the edge at `edge_idx` of `face` violates the Delaunay condition
    /// against its neighbour, flips it and recursively re-checks the four
    /// edges newly exposed by the flip.
    fn check_flip(&mut self, face_id: FaceId, edge_idx: usize) {
        let Some(g_id) = self.faces[face_id.0].nbrs[edge_idx] else { return };
        if !self.faces[g_id.0].alive {
            return;
        }
        let Some(g_idx) = self.faces[g_id.0].neighbour_index(face_id) else { return };

        let f = self.faces[face_id.0].clone();
        let g = self.faces[g_id.0].clone();

        let p = f.verts[edge_idx];
        let u = f.verts[(edge_idx + 1) % 3];
        let w = f.verts[(edge_idx + 2) % 3];
        let d = g.verts[g_idx];

        if !self.has_to_flip(p, u, w, d) {
            return;
        }

        let nbr_pu = f.nbrs[(edge_idx + 2) % 3];
        let nbr_wp = f.nbrs[(edge_idx + 1) % 3];
        let nbr_ud = g.nbrs[(g_idx + 1) % 3];
        let nbr_dw = g.nbrs[(g_idx + 2) % 3];

        self.faces[face_id.0].alive = false;
        self.faces[g_id.0].alive = false;

        let t1 = self.push_face(Face::new([p, u, d], [nbr_ud, None, nbr_pu]));
        let t2 = self.push_face(Face::new([p, d, w], [nbr_dw, nbr_wp, None]));
        self.faces[t1.0].nbrs[1] = Some(t2);
        self.faces[t2.0].nbrs[2] = Some(t1);

        // Both source buckets are individually sorted; merging (rather than
        // just concatenating) keeps the invariant `link_bucket` relies on.
        let mut merged_bucket = f.bucket;
        merged_bucket.extend(g.bucket);
        merged_bucket.sort_unstable();
        for e in merged_bucket {
            if ccw(&self.points[p], &self.points[d], &self.points[e]) == Orientation::CounterClockwise {
                self.faces[t2.0].bucket.push(e);
            } else {
                self.faces[t1.0].bucket.push(e);
            }
        }
        self.link_bucket(t1);
        self.link_bucket(t2);

        self.relink(nbr_ud, face_id, t1);
        self.relink(nbr_pu, face_id, t1);
        self.relink(nbr_dw, g_id, t2);
        self.relink(nbr_wp, g_id, t2);

        self.check_flip(t1, 0);
        self.check_flip(t1, 2);
        self.check_flip(t2, 0);
        self.check_flip(t2, 1);
    }

    /// Walks the face pool once, at the end of construction, copying every
    /// live face into a dense array and rewriting every neighbour handle
    /// (and `vertex_location` entry) through the resulting old-to-new
    /// handle map. Every split or flip leaves its inputs dead and its
    /// outputs live, so without this pass `faces` would grow by three
    /// entries per insertion and two per flip forever.
    fn compact(&mut self) {
        let mut mapping = vec![None; self.faces.len()];
        let mut dense = Vec::new();
        for (old_idx, face) in self.faces.iter().enumerate() {
            if face.alive {
                mapping[old_idx] = Some(FaceId(dense.len()));
                dense.push(face.clone());
            }
        }
        for face in &mut dense {
            for nbr in face.nbrs.iter_mut() {
                *nbr = nbr.and_then(|old| mapping[old.0]);
            }
            // Every point has been inserted by the time compaction runs;
            // the bucket bookkeeping no longer serves a purpose afterwards.
            face.bucket.clear();
        }
        for loc in &mut self.vertex_location {
            if let Some(new_id) = mapping[loc.0] {
                *loc = new_id;
            }
        }
        self.faces = dense;
    }

    /// Whether `face` touches one of the three synthetic super-triangle
    /// corners, i.e. lies outside the real input's convex hull.
    pub fn is_infinite(&self, face: FaceId) -> bool {
        self.faces[face.0].verts.iter().any(|&v| v < self.super_count)
    }

    /// The three corner points of `face`.
    pub fn corners(&self, face: FaceId) -> [&Point; 3] {
        let v = self.faces[face.0].verts;
        [&self.points[v[0]], &self.points[v[1]], &self.points[v[2]]]
    }

    /// The (up to three) faces neighbouring `face`, one per edge.
    pub fn neighbours(&self, face: FaceId) -> [Option<FaceId>; 3] {
        self.faces[face.0].nbrs
    }

    /// All faces that do not touch a super-triangle corner, i.e. the actual
    /// triangulation of the input points.
    pub fn finite_faces(&self) -> Vec<FaceId> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, _)| FaceId(i))
            .filter(|&id| !self.is_infinite(id))
            .collect()
    }

    /// The bit budget used for points' coordinates, as declared at
    /// construction.
    pub fn bits(&self) -> usize {
        self.bits
    }
}
