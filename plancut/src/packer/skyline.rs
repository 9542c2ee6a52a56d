use crate::packer::{BinSize, BinState, Candidate, Score, orientations};
use crate::util::FPA;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkylineRule {
    BottomLeft,
    MinWaste,
}

/// Horizontal segment of the skyline
#[derive(Clone, Copy, Debug)]
struct Segment {
    x: f64,
    y: f64,
    width: f64,
}

/// Bin tracking the upper envelope of the placed rectangles.
/// Space below the skyline is never reconsidered, which makes it the fastest heuristic.
#[derive(Clone, Debug)]
pub struct SkylineBin {
    rule: SkylineRule,
    width: f64,
    height: f64,
    skyline: Vec<Segment>,
}

impl SkylineBin {
    pub fn new(size: BinSize, rule: SkylineRule) -> Self {
        Self {
            rule,
            width: size.width,
            height: size.height,
            skyline: vec![Segment {
                x: 0.0,
                y: 0.0,
                width: size.width,
            }],
        }
    }

    /// Lowest y at which a rectangle of the given size fits when its left edge sits at segment `i`,
    /// along with the area left empty underneath it.
    fn fit_at(&self, i: usize, width: f64, height: f64) -> Option<(f64, f64)> {
        let x = self.skyline[i].x;
        if FPA(x + width) > FPA(self.width) {
            return None;
        }
        let mut y = self.skyline[i].y;
        let mut remaining = width;
        let mut j = i;
        while FPA(remaining) > FPA(0.0) {
            let seg = self.skyline.get(j)?;
            y = f64::max(y, seg.y);
            if FPA(y + height) > FPA(self.height) {
                return None;
            }
            remaining -= seg.width;
            j += 1;
        }

        let mut waste = 0.0;
        let mut remaining = width;
        for seg in &self.skyline[i..j] {
            let spanned = f64::min(seg.width, remaining);
            waste += (y - seg.y) * spanned;
            remaining -= spanned;
        }
        Some((y, waste))
    }

    fn merge_segments(&mut self) {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.skyline.len());
        for seg in self.skyline.drain(..) {
            match merged.last_mut() {
                Some(last) if FPA(last.y) == FPA(seg.y) => last.width += seg.width,
                _ => merged.push(seg),
            }
        }
        self.skyline = merged;
    }
}

impl BinState for SkylineBin {
    fn find(&self, width: f64, height: f64, allow_rotation: bool) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for i in 0..self.skyline.len() {
            for (w, h, rotated) in orientations(width, height, allow_rotation) {
                let Some((y, waste)) = self.fit_at(i, w, h) else {
                    continue;
                };
                let x = self.skyline[i].x;
                let score = match self.rule {
                    SkylineRule::BottomLeft => Score(y + h, x),
                    SkylineRule::MinWaste => Score(waste, y + h),
                };
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
        let i = self
            .skyline
            .iter()
            .position(|s| FPA(s.x) == FPA(c.x))
            .expect("candidate should start at a skyline segment");

        self.skyline.insert(
            i,
            Segment {
                x: c.x,
                y: c.y + c.height,
                width: c.width,
            },
        );

        //shrink or remove the segments now covered by the new one
        let right = c.x + c.width;
        let j = i + 1;
        while j < self.skyline.len() {
            let seg = self.skyline[j];
            if FPA(seg.x) >= FPA(right) {
                break;
            }
            let covered = right - seg.x;
            if FPA(seg.width) <= FPA(covered) {
                self.skyline.remove(j);
            } else {
                self.skyline[j].x += covered;
                self.skyline[j].width -= covered;
                break;
            }
        }
        self.merge_segments();
    }
}
