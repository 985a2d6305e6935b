//! Edge shape resampling.
//!
//! The even-spacing walk is adapted from the haversine-intermediate
//! routines in the [geo] crate, generalized from a single great-circle
//! segment to a whole polyline.
//!
//! [geo](https://github.com/georust/geo/blob/eb0cd98f3ccfa226631af23d94d66d214ea66488/geo/src/algorithm/haversine_intermediate.rs)

use geo::{
    algorithm::{HaversineDistance, HaversineIntermediate},
    geometry::{Coord, Point},
};

/// Default spacing, in meters, between consecutive elevation postings
/// along an edge's shape.
pub const POSTING_INTERVAL: f64 = 60.0;

/// One directed edge's view of a graph tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Offset of the shared shape record in the tile's shape table.
    /// Directed edges whose paths coincide carry the same offset.
    pub info_offset: u32,

    /// The edge's path as stored, `x` = longitude, `y` = latitude.
    pub shape: Vec<Coord<f64>>,

    /// Edge length in meters.
    pub length_m: f64,

    pub tunnel: bool,
    pub ferry: bool,
    pub bridge: bool,
}

/// Returns elevation-posting locations along `edge`'s shape.
///
/// Tunnels and ferries have no elevation dependency and yield
/// nothing. Bridges and edges shorter than three postings yield only
/// the shape endpoints, even when those coincide. Everything else is
/// resampled at an even great-circle spacing no wider than `interval`
/// meters, endpoints included. Identical input always yields an
/// identical sequence.
pub fn resample(edge: &Edge, interval: f64) -> Vec<Coord<f64>> {
    if edge.tunnel || edge.ferry {
        return Vec::new();
    }
    let (Some(&first), Some(&last)) = (edge.shape.first(), edge.shape.last()) else {
        return Vec::new();
    };
    if edge.length_m < 3.0 * interval || edge.bridge {
        return vec![first, last];
    }
    resample_polyline(&edge.shape, interval)
}

fn resample_polyline(shape: &[Coord<f64>], interval: f64) -> Vec<Coord<f64>> {
    let points: Vec<Point<f64>> = shape.iter().copied().map(Point::from).collect();

    let mut segment_lens = Vec::with_capacity(points.len() - 1);
    let mut total = 0.0;
    for pair in points.windows(2) {
        let len = pair[0].haversine_distance(&pair[1]);
        total += len;
        segment_lens.push(len);
    }
    if total <= 0.0 {
        return vec![shape[0], shape[shape.len() - 1]];
    }

    // Normalize the spacing so it never exceeds `interval`.
    let steps = (total / interval).ceil();
    let spacing = total / steps;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = steps as usize;

    let mut resampled = Vec::with_capacity(steps + 1);
    resampled.push(shape[0]);

    let mut segment = 0;
    // Arc length covered by fully consumed segments.
    let mut walked = 0.0;
    for step in 1..steps {
        #[allow(clippy::cast_precision_loss)]
        let target = spacing * step as f64;
        while segment < segment_lens.len() - 1 && walked + segment_lens[segment] < target {
            walked += segment_lens[segment];
            segment += 1;
        }
        let fraction = if segment_lens[segment] > 0.0 {
            ((target - walked) / segment_lens[segment]).min(1.0)
        } else {
            0.0
        };
        resampled.push(
            points[segment]
                .haversine_intermediate(&points[segment + 1], fraction)
                .0,
        );
    }

    resampled.push(shape[shape.len() - 1]);
    resampled
}

#[cfg(test)]
mod tests {
    use super::{resample, Coord, Edge, HaversineDistance, Point, POSTING_INTERVAL};
    use approx::assert_relative_eq;

    fn edge(shape: Vec<Coord<f64>>, length_m: f64) -> Edge {
        Edge {
            info_offset: 0,
            shape,
            length_m,
            tunnel: false,
            ferry: false,
            bridge: false,
        }
    }

    // Roughly 1.1 km due north across the equator.
    fn long_shape() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: -0.005 },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.0, y: 0.005 },
        ]
    }

    fn shape_len(shape: &[Coord<f64>]) -> f64 {
        shape
            .windows(2)
            .map(|pair| Point::from(pair[0]).haversine_distance(&Point::from(pair[1])))
            .sum()
    }

    #[test]
    fn test_tunnel_and_ferry_yield_nothing() {
        let mut e = edge(long_shape(), 1100.0);
        e.tunnel = true;
        assert!(resample(&e, POSTING_INTERVAL).is_empty());

        let mut e = edge(long_shape(), 1100.0);
        e.ferry = true;
        e.bridge = true;
        assert!(resample(&e, POSTING_INTERVAL).is_empty());
    }

    #[test]
    fn test_short_edge_yields_endpoints() {
        let e = edge(long_shape(), 179.0);
        let samples = resample(&e, POSTING_INTERVAL);
        assert_eq!(samples, vec![long_shape()[0], long_shape()[2]]);
    }

    #[test]
    fn test_bridge_overrides_even_sampling() {
        let mut e = edge(long_shape(), 1100.0);
        e.bridge = true;
        let samples = resample(&e, POSTING_INTERVAL);
        assert_eq!(samples, vec![long_shape()[0], long_shape()[2]]);
    }

    #[test]
    fn test_even_sampling() {
        let shape = long_shape();
        let total = shape_len(&shape);
        let e = edge(shape.clone(), total);
        let samples = resample(&e, POSTING_INTERVAL);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = (total / POSTING_INTERVAL).ceil() as usize + 1;
        assert_eq!(samples.len(), expected);
        assert_eq!(samples[0], shape[0]);
        assert_eq!(samples[samples.len() - 1], shape[2]);

        let spacing = total / (expected - 1) as f64;
        assert!(spacing <= POSTING_INTERVAL);
        for pair in samples.windows(2) {
            let d = Point::from(pair[0]).haversine_distance(&Point::from(pair[1]));
            assert_relative_eq!(d, spacing, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_deterministic() {
        let e = edge(long_shape(), 1100.0);
        assert_eq!(
            resample(&e, POSTING_INTERVAL),
            resample(&e, POSTING_INTERVAL)
        );
    }

    #[test]
    fn test_degenerate_shapes() {
        // Single point: endpoints coincide.
        let p = Coord { x: 7.0, y: 46.0 };
        let e = edge(vec![p], 200.0);
        assert_eq!(resample(&e, POSTING_INTERVAL), vec![p, p]);

        // All points identical: zero arc length despite the length
        // attribute claiming otherwise.
        let e = edge(vec![p, p, p], 200.0);
        assert_eq!(resample(&e, POSTING_INTERVAL), vec![p, p]);

        let e = edge(Vec::new(), 10.0);
        assert!(resample(&e, POSTING_INTERVAL).is_empty());
    }
}
