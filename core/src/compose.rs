//! Middleware sequencing.
//!
//! # Design
//! Composition is an ordered-list fold. [`compose`] takes a list of steps,
//! lifts each one to a [`Middleware`] exactly once, and returns a single
//! middleware that threads the request through the lifted list left to
//! right: the first declared step runs first, every later step sees the
//! request as transformed by all earlier ones, and the first failing step
//! aborts the whole application with its error — nothing after it runs, and
//! no partial result escapes. An empty list composes to [`identity`].
//!
//! [`Step`] is the fold's input alphabet. Besides ready-made middleware it
//! admits a few literals that lift to their obvious combinator: a [`Path`]
//! (or a path string) lifts to [`path`], a [`Method`] lifts to [`method`].
//! Lifting is positional sugar only; a lifted literal folds exactly as if
//! the combinator had been written at that spot.
//!
//! Conditional inclusion stays plain data: [`optional`] turns an absent
//! middleware into a no-op, and [`Branch`] holds whichever side of an
//! if/else was chosen. A composed middleware is itself a step, so loops and
//! sub-chains nest through the same fold.

use crate::middleware::{identity, method, path, Middleware};
use crate::path::Path;
use crate::request::Method;

/// One step of a composition list.
///
/// Either a middleware to run or a literal to lift into one.
pub enum Step {
    Run(Middleware),
    Path(Path),
    Method(Method),
}

impl Step {
    /// Lowers the step to the middleware it stands for.
    pub fn lift(self) -> Middleware {
        match self {
            Step::Run(middleware) => middleware,
            Step::Path(value) => path(value),
            Step::Method(value) => method(value),
        }
    }
}

impl From<Middleware> for Step {
    fn from(middleware: Middleware) -> Self {
        Step::Run(middleware)
    }
}

impl From<Path> for Step {
    fn from(value: Path) -> Self {
        Step::Path(value)
    }
}

impl From<Method> for Step {
    fn from(value: Method) -> Self {
        Step::Method(value)
    }
}

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        Step::Path(Path::from(value))
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Step::Path(Path::from(value))
    }
}

impl From<Branch> for Step {
    fn from(branch: Branch) -> Self {
        Step::Run(branch.into_inner())
    }
}

/// Folds an ordered list of steps into one middleware.
///
/// Lifting happens once, up front; the returned middleware owns the lifted
/// list and can be applied any number of times. Application is a
/// left-to-right short-circuiting fold, as described in the module docs.
pub fn compose<I>(steps: I) -> Middleware
where
    I: IntoIterator,
    I::Item: Into<Step>,
{
    let lifted: Vec<Middleware> = steps
        .into_iter()
        .map(|step| step.into().lift())
        .collect();
    Box::new(move |request| {
        lifted
            .iter()
            .try_fold(request, |request, middleware| middleware(request))
    })
}

/// Includes a middleware when present, [`identity`] when absent.
pub fn optional(step: Option<Middleware>) -> Middleware {
    step.unwrap_or_else(identity)
}

/// The chosen side of a two-way branch.
///
/// Both sides of an if/else are well-typed middleware; constructing a
/// `Branch` records which one was selected, and only that one ever runs.
pub enum Branch {
    First(Middleware),
    Second(Middleware),
}

impl Branch {
    /// Returns the carried middleware.
    pub fn into_inner(self) -> Middleware {
        match self {
            Branch::First(middleware) | Branch::Second(middleware) => middleware,
        }
    }
}

/// Variadic sugar over [`compose`].
///
/// Every element is converted with [`Step::from`], then the list is folded;
/// the macro adds no semantics of its own. Middleware, `Path`/`Method`
/// literals, path strings, and `Branch` values can be mixed freely.
#[macro_export]
macro_rules! chain {
    ($($step:expr),* $(,)?) => {{
        let steps: ::std::vec::Vec<$crate::Step> =
            ::std::vec![$($crate::Step::from($step)),*];
        $crate::compose(steps)
    }};
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::error::RequestError;
    use crate::middleware::{append_segment, header};
    use crate::request::Request;

    fn failing(message: &str) -> Middleware {
        let message = message.to_string();
        Box::new(move |_| Err(RequestError::EncodingFailed(message.clone())))
    }

    /// A middleware that records whether it was ever applied.
    fn probe() -> (Middleware, Arc<AtomicBool>) {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let middleware: Middleware = Box::new(move |request| {
            flag.store(true, Ordering::SeqCst);
            Ok(request)
        });
        (middleware, ran)
    }

    #[test]
    fn steps_apply_in_declaration_order() {
        let build = compose(vec![
            append_segment("users"),
            append_segment("12"),
            append_segment("edit"),
        ]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["users", "12", "edit"]);
    }

    #[test]
    fn later_steps_see_earlier_effects() {
        let build = compose(vec![path("/users"), append_segment("12")]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["users", "12"]);
    }

    #[test]
    fn later_writes_override_earlier_ones() {
        let build = compose(vec![
            Step::from(Method::Post),
            Step::from(Method::Delete),
            Step::from(header("X-Trace", "first")),
            Step::from(header("X-Trace", "second")),
        ]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.headers["X-Trace"], "second");
    }

    #[test]
    fn first_failure_short_circuits_the_fold() {
        let (late, ran) = probe();
        let build = compose(vec![failing("early"), failing("late"), late]);
        let err = build(Request::default()).unwrap_err();
        assert!(matches!(err, RequestError::EncodingFailed(msg) if msg == "early"));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn empty_list_composes_to_identity() {
        let steps: Vec<Step> = Vec::new();
        let build = compose(steps);
        let req = build(Request::default()).unwrap();
        assert_eq!(req, Request::default());
    }

    #[test]
    fn literals_lift_at_their_position() {
        let build = compose(vec![Step::from("/users/12"), Step::from(Method::Delete)]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["users", "12"]);
        assert_eq!(req.method, Method::Delete);
    }

    #[test]
    fn lifted_path_participates_in_ordering() {
        // The literal replaces the path, so a later append extends it and an
        // even later literal replaces it again.
        let build = compose(vec![
            Step::from("/users"),
            Step::from(append_segment("12")),
            Step::from("/teams"),
        ]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["teams"]);
    }

    #[test]
    fn optional_absent_is_a_no_op() {
        let build = compose(vec![optional(None), optional(Some(append_segment("a")))]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["a"]);
    }

    #[test]
    fn branch_runs_only_the_carried_side() {
        let choose = |admin: bool| {
            if admin {
                Branch::First(path("/admin"))
            } else {
                Branch::Second(path("/public"))
            }
        };
        let req = compose(vec![Step::from(choose(true))])(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["admin"]);
        let req = compose(vec![Step::from(choose(false))])(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["public"]);
    }

    #[test]
    fn loop_built_middleware_folds_in_order() {
        let steps: Vec<Middleware> = ["users", "12", "edit"]
            .into_iter()
            .map(append_segment)
            .collect();
        let req = compose(steps)(Request::default()).unwrap();
        assert_eq!(req.path.segments, vec!["users", "12", "edit"]);
    }

    #[test]
    fn composed_chains_nest_as_steps() {
        let inner = compose(vec![header("Accept", "application/json")]);
        let build = compose(vec![Step::from(Method::Post), Step::from(inner)]);
        let req = build(Request::default()).unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.headers["Accept"], "application/json");
    }

    #[test]
    fn chain_macro_matches_explicit_compose() {
        let sugar = chain![Method::Post, "/users", append_segment(12)];
        let explicit = compose(vec![
            Step::from(Method::Post),
            Step::from("/users"),
            Step::from(append_segment(12)),
        ]);
        assert_eq!(
            sugar(Request::default()).unwrap(),
            explicit(Request::default()).unwrap()
        );
    }

    #[test]
    fn composed_middleware_is_reusable() {
        let build = chain!["/users", append_segment("12")];
        let first = build(Request::default()).unwrap();
        let second = build(Request::default()).unwrap();
        assert_eq!(first, second);
    }
}
