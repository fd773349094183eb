mod evaluate;

use crate::consts::SMALL_DISTANCE;
use crate::evaluate::Evaluate;
use crate::subdivide::Subdivide;

// This struct models a simple piecewise function. It maps 0-1 such that 0 is the beginning of the first curve
// in the collection and 1 is the end of the last.
#[derive(Clone, Debug)]
pub struct Piecewise<T: Evaluate> {
    pub cuts: Vec<f64>,
    // this should definitely change to private at some point with an iterator or getter to access
    pub segs: Vec<T>,
}

impl<T: Evaluate> Piecewise<T> {
    pub fn new(segs: Vec<T>, cuts: Option<Vec<f64>>) -> Self {
        match cuts {
            Some(cuts) => return Self { cuts, segs },

            // if we are given just a list of segments we generate the cuts ourselves
            _ => {
                let mut out_cuts: Vec<f64> = Vec::new();

                out_cuts.push(0.);

                let seg_len = segs.len();
                for i in 0..seg_len {
                    out_cuts.push((i + 1) as f64 / seg_len as f64);
                }

                return Self {
                    cuts: out_cuts,
                    segs,
                };
            }
        }
    }

    // implementation ripped from lib2geom, performs a binary search to find our segment
    pub fn seg_n(&self, t: f64) -> usize {
        let mut left = 0;
        let mut right = self.cuts.len() - 1;

        while left < right {
            let middle = (right + left) / 2;

            if left == middle {
                return middle;
            }
            if right == middle {
                return left;
            }
            if self.cuts[middle] == t {
                return middle;
            };

            if self.cuts[middle] < t {
                left = middle
            } else {
                right = middle;
            }
        }

        // This needs to be replaced with success/failure.
        panic!("Couldn't find the target segment!");
    }

    pub fn seg_t(&self, t: f64) -> f64 {
        let i = self.seg_n(t);
        return (t - self.cuts[i]) / (self.cuts[i + 1] - self.cuts[i]);
    }
}

impl<T: Evaluate + Subdivide + Clone> Piecewise<T> {
    pub fn is_closed(&self) -> bool {
        if self.start_point().is_near(self.end_point(), SMALL_DISTANCE) {
            return true;
        }
        return false;
    }

    // we split every segment at its local t
    /// Warning: This regenerates uniform cuts.
    pub fn subdivide(&self, t: f64) -> Piecewise<T> {
        let mut new_segments = Vec::new();
        for primitive in &self.segs {
            let subdivisions = primitive.split(t);

            match subdivisions {
                Some(subs) => {
                    new_segments.push(subs.0);
                    new_segments.push(subs.1);
                }
                _ => {
                    new_segments.push(primitive.clone());
                }
            }
        }

        return Piecewise::new(new_segments, None);
    }
}

// Returns a primitive and the range of t values that it covers.
pub struct SegmentIterator<T: Evaluate + Clone> {
    piecewise: Piecewise<T>,
    counter: usize,
}

impl<T: Evaluate + Clone> SegmentIterator<T> {
    pub fn new(pw: Piecewise<T>) -> Self {
        Self {
            piecewise: pw,
            counter: 0,
        }
    }
}

impl<T: Evaluate + Clone> Iterator for SegmentIterator<T> {
    type Item = (T, f64, f64); // primitive, start time, end time

    fn next(&mut self) -> Option<Self::Item> {
        if self.counter == self.piecewise.segs.len() {
            return None;
        }

        let start_time = self.piecewise.cuts[self.counter];
        let end_time = self.piecewise.cuts[self.counter + 1];
        let item = &self.piecewise.segs[self.counter];

        self.counter = self.counter + 1;
        return Some((item.clone(), start_time, end_time));
    }
}
