//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::ExtentInt;

/// Column-by-column iterator: all rows of a column before advancing to the next column
pub struct GridIterator {
    x: u32,
    y: u32,
    limits: ExtentInt,
    finished: bool,
}

impl GridIterator {
    pub fn new(limits: ExtentInt) -> GridIterator {
        if limits.minx < limits.maxx && limits.miny < limits.maxy {
            GridIterator {
                x: limits.minx,
                y: limits.miny,
                limits,
                finished: false,
            }
        } else {
            // Return "empty" iterator for grids without cells
            GridIterator {
                x: 0,
                y: 0,
                limits,
                finished: true,
            }
        }
    }
}

impl Iterator for GridIterator {
    /// Current cell index `(x, y)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.x, self.y);
        if self.y < self.limits.maxy - 1 {
            self.y += 1;
        } else if self.x < self.limits.maxx - 1 {
            self.x += 1;
            self.y = self.limits.miny;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let rows = (self.limits.maxy - self.limits.miny) as usize;
        let remaining = (self.limits.maxx - self.x - 1) as usize * rows
            + (self.limits.maxy - self.y) as usize;
        (remaining, Some(remaining))
    }
}

#[test]
fn test_column_major_iter() {
    let griditer = GridIterator::new(ExtentInt {
        minx: 0,
        miny: 0,
        maxx: 2,
        maxy: 3,
    });
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    let griditer = GridIterator::new(ExtentInt {
        minx: 1,
        miny: 2,
        maxx: 3,
        maxy: 4,
    });
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);

    let griditer = GridIterator::new(ExtentInt {
        minx: 0,
        miny: 0,
        maxx: 1,
        maxy: 1,
    });
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0)]);
}

#[test]
fn test_size_hint() {
    let mut griditer = GridIterator::new(ExtentInt {
        minx: 0,
        miny: 0,
        maxx: 3,
        maxy: 4,
    });
    assert_eq!(griditer.size_hint(), (12, Some(12)));
    griditer.next();
    griditer.next();
    assert_eq!(griditer.size_hint(), (10, Some(10)));
    let rest = griditer.count();
    assert_eq!(rest, 10);
}

#[test]
fn test_empty_limits() {
    // no columns
    let griditer = GridIterator::new(ExtentInt {
        minx: 0,
        miny: 0,
        maxx: 0,
        maxy: 5,
    });
    assert_eq!(griditer.count(), 0);

    // no rows
    let griditer = GridIterator::new(ExtentInt {
        minx: 0,
        miny: 0,
        maxx: 5,
        maxy: 0,
    });
    assert_eq!(griditer.size_hint(), (0, Some(0)));
    assert_eq!(griditer.count(), 0);

    // inverted limits
    let griditer = GridIterator::new(ExtentInt {
        minx: 3,
        miny: 0,
        maxx: 2,
        maxy: 2,
    });
    assert_eq!(griditer.count(), 0);
}
