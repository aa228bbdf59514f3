use std::fmt::{Debug, Display};

use log::info;
use ndarray::Array1;

use crate::Hyperparameters;

/// Upper bound on the entries kept in a [`History`].
pub const HISTORY_CAP: usize = 100_000;

/// A weight that can take a gradient step: either a single scalar or one
/// coefficient per feature.
pub trait Weight: Clone + Debug + Display {
    /// Returns `self - learning_rate * grad`.
    fn step(&self, grad: &Self, learning_rate: f64) -> Self;
}

impl Weight for f64 {
    fn step(&self, grad: &Self, learning_rate: f64) -> Self {
        self - learning_rate * grad
    }
}

impl Weight for Array1<f64> {
    fn step(&self, grad: &Self, learning_rate: f64) -> Self {
        self - &(learning_rate * grad)
    }
}

/// Cost and parameters recorded after every iteration, kept for plotting.
#[derive(Debug, Clone, Default)]
pub struct History<W> {
    pub costs: Vec<f64>,
    pub params: Vec<(W, f64)>,
}

impl<W: Weight> History<W> {
    pub fn new() -> Self {
        History {
            costs: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Appends a snapshot unless the cap has been reached.
    pub fn record(&mut self, cost: f64, w: &W, b: f64) {
        if self.costs.len() < HISTORY_CAP {
            self.costs.push(cost);
            self.params.push((w.clone(), b));
        }
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn last_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}

/// Outcome of a gradient descent run.
#[derive(Debug, Clone)]
pub struct Descent<W> {
    pub w: W,
    pub b: f64,
    pub history: History<W>,
}

/// Fixed step, fixed budget batch gradient descent.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    learning_rate: f64,
    iterations: usize,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - The *length* of the steps taken against the gradient.
    /// * `iterations` - How many updates `run` performs. There is no early stop.
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    pub fn from_hyperparameters(hp: &Hyperparameters) -> Self {
        Self::new(hp.learning_rate, hp.iterations)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the descent from `(w_in, b_in)`.
    ///
    /// Each iteration evaluates `gradient_fn` at the current parameters,
    /// steps `w` and `b` together, then records the post-update cost. A
    /// progress line is logged every `ceil(iterations / 10)` iterations.
    ///
    /// Nothing is validated: a bad learning rate or an empty training set
    /// shows up as a diverging or NaN cost.
    pub fn run<X, W, C, G>(
        &self,
        x: &X,
        y: &Array1<f64>,
        w_in: W,
        b_in: f64,
        cost_fn: C,
        gradient_fn: G,
    ) -> Descent<W>
    where
        X: ?Sized,
        W: Weight,
        C: Fn(&X, &Array1<f64>, &W, f64) -> f64,
        G: Fn(&X, &Array1<f64>, &W, f64) -> (W, f64),
    {
        let mut w = w_in;
        let mut b = b_in;
        let mut history = History::new();
        let interval = progress_interval(self.iterations);

        for i in 0..self.iterations {
            let (dj_dw, dj_db) = gradient_fn(x, y, &w, b);
            (w, b) = update(&w, b, &dj_dw, dj_db, self.learning_rate);

            let cost = cost_fn(x, y, &w, b);
            history.record(cost, &w, b);

            if i % interval == 0 {
                info!("{}", progress_line(i, cost, &dj_dw, dj_db, &w, b));
            }
        }

        Descent { w, b, history }
    }
}

/// Simultaneous parameter update: both new values come from the old ones.
pub fn update<W: Weight>(w: &W, b: f64, dj_dw: &W, dj_db: f64, learning_rate: f64) -> (W, f64) {
    (w.step(dj_dw, learning_rate), b - learning_rate * dj_db)
}

fn progress_line<W: Weight>(i: usize, cost: f64, dj_dw: &W, dj_db: f64, w: &W, b: f64) -> String {
    format!("Iteration {i:>6}: Cost {cost:0.2e} dj_dw: {dj_dw}, dj_db: {dj_db:0.3e} w: {w}, b: {b:0.5e}")
}

/// Number of iterations between two progress lines, `ceil(iterations / 10)`.
pub fn progress_interval(iterations: usize) -> usize {
    iterations.div_ceil(10).max(1)
}

/// Free-function form of [`GradientDescent::run`].
#[allow(clippy::too_many_arguments)]
pub fn gradient_descent<X, W, C, G>(
    x: &X,
    y: &Array1<f64>,
    w_in: W,
    b_in: f64,
    alpha: f64,
    iterations: usize,
    cost_fn: C,
    gradient_fn: G,
) -> Descent<W>
where
    X: ?Sized,
    W: Weight,
    C: Fn(&X, &Array1<f64>, &W, f64) -> f64,
    G: Fn(&X, &Array1<f64>, &W, f64) -> (W, f64),
{
    GradientDescent::new(alpha, iterations).run(x, y, w_in, b_in, cost_fn, gradient_fn)
}
