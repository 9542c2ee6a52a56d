use crate::geometry::Rect;
use crate::packer::{BinSize, BinState, Candidate, Score, orientations};
use crate::util::FPA;
use itertools::Itertools;

/// Scoring rule used to choose among the free rectangles of a [`MaxRectsBin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaxRectsRule {
    BestShortSideFit,
    BestAreaFit,
    BestLongSideFit,
    BottomLeft,
}

/// Bin tracking all maximal free rectangles.
/// Every free rectangle is as large as possible, so free rectangles overlap each other.
#[derive(Clone, Debug)]
pub struct MaxRectsBin {
    rule: MaxRectsRule,
    free: Vec<Rect>,
}

impl MaxRectsBin {
    pub fn new(size: BinSize, rule: MaxRectsRule) -> Self {
        Self {
            rule,
            free: vec![Rect::from_xywh(0.0, 0.0, size.width, size.height)],
        }
    }

    fn score(&self, free: &Rect, x: f64, y: f64, width: f64, height: f64) -> Score {
        let leftover_h = (free.width() - width).abs();
        let leftover_v = (free.height() - height).abs();
        let short = f64::min(leftover_h, leftover_v);
        let long = f64::max(leftover_h, leftover_v);
        match self.rule {
            MaxRectsRule::BestShortSideFit => Score(short, long),
            MaxRectsRule::BestLongSideFit => Score(long, short),
            MaxRectsRule::BestAreaFit => Score(free.area() - width * height, short),
            MaxRectsRule::BottomLeft => Score(y + height, x),
        }
    }

    /// Splits every free rectangle intersecting `used` into at most four maximal remainders.
    fn split_free(&mut self, used: &Rect) {
        let mut new_free = Vec::with_capacity(self.free.len() + 4);
        for f in self.free.drain(..) {
            if !f.overlaps(used) {
                new_free.push(f);
                continue;
            }
            if FPA(used.x_min) > FPA(f.x_min) {
                new_free.push(Rect { x_max: used.x_min, ..f });
            }
            if FPA(used.x_max) < FPA(f.x_max) {
                new_free.push(Rect { x_min: used.x_max, ..f });
            }
            if FPA(used.y_min) > FPA(f.y_min) {
                new_free.push(Rect { y_max: used.y_min, ..f });
            }
            if FPA(used.y_max) < FPA(f.y_max) {
                new_free.push(Rect { y_min: used.y_max, ..f });
            }
        }
        self.free = new_free;
    }

    /// Removes free rectangles fully contained in another one.
    fn prune_free(&mut self) {
        let n = self.free.len();
        let mut redundant = vec![false; n];
        for (i, j) in (0..n).tuple_combinations() {
            if redundant[i] || redundant[j] {
                continue;
            }
            if self.free[j].contains(&self.free[i]) {
                redundant[i] = true;
            } else if self.free[i].contains(&self.free[j]) {
                redundant[j] = true;
            }
        }
        let mut idx = 0;
        self.free.retain(|_| {
            let keep = !redundant[idx];
            idx += 1;
            keep
        });
    }
}

impl BinState for MaxRectsBin {
    fn find(&self, width: f64, height: f64, allow_rotation: bool) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for free in &self.free {
            for (w, h, rotated) in orientations(width, height, allow_rotation) {
                if FPA(w) > FPA(free.width()) || FPA(h) > FPA(free.height()) {
                    continue;
                }
                let (x, y) = (free.x_min, free.y_min);
                let score = self.score(free, x, y, w, h);
                if best.is_none_or(|b| score.better_than(&b.score)) {
                    best = Some(Candidate {
                        x,
                        y,
                        width: w,
                        height: h,
                        rotated,
                        score,
                    });
                }
            }
        }
        best
    }

    fn commit(&mut self, c: &Candidate) {
        let used = Rect::from_xywh(c.x, c.y, c.width, c.height);
        self.split_free(&used);
        self.prune_free();
    }
}
