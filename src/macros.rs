//! Macros for embedding the relational language as a DSL in Rust.
//!
//! The n-ary connectives wrap every operand in [`delay`] before folding
//! pairwise, so any clause may be recursive without special care from the
//! caller.
//!
//! [`delay`]: crate::goals::primitive::delay

/// Creates a goal that succeeds if any of its subgoals succeeds.
/// Subgoals are separated by `;`.
#[macro_export]
macro_rules! disj {
    () => { $crate::goals::primitive::fail() };

    ($g:expr $(;)?) => { $crate::goals::primitive::delay($g) };

    ($g0:expr; $($g:expr);* $(;)?) => {
        $crate::goals::primitive::disj2(
            $crate::goals::primitive::delay($g0),
            $crate::disj!($($g);*),
        )
    };
}

/// Creates a goal that succeeds if all of its subgoals succeed.
/// Subgoals are separated by `,`.
#[macro_export]
macro_rules! conj {
    () => { $crate::goals::primitive::succeed() };

    ($g:expr $(,)?) => { $crate::goals::primitive::delay($g) };

    ($g0:expr, $($g:expr),* $(,)?) => {
        $crate::goals::primitive::conj2(
            $crate::goals::primitive::delay($g0),
            $crate::conj!($($g),*),
        )
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (terminated by `;`) succeeds if all of its goals (separated by
/// `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),*;)* ) => {
        $crate::disj!($($crate::conj!($($g),*));*)
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Only the first *line* whose head goal succeeds can contribute values.
#[macro_export]
macro_rules! conda {
    ($($g:expr),* $(,)?) => { $crate::conj!($($g),*) };

    ($g0:expr $(, $g:expr)*; $($rest:tt)*) => {
        $crate::goals::combinators::ifte(
            $g0,
            $crate::conj!($($g),*),
            $crate::conda!($($rest)*),
        )
    };
}

/// Like [`conda!`], except that a successful line succeeds only once.
#[macro_export]
macro_rules! condu {
    ($($g0:expr $(, $g:expr)*);* $(;)?) => {
        $crate::conda!($($crate::goals::combinators::once($g0) $(, $g)*);*)
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// `fresh!((x, y), g1, g2)` allocates `x` and `y` from the state the goal
/// is applied to and conjoins the body goals.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),* $(,)?), $($g:expr),* $(,)?) => {
        move |st: $crate::prelude::State| {
            $( let ($x, st) = st.fresh_var(); )*
            $crate::prelude::Goal::apply(&$crate::conj!($($g),*), st)
        }
    };
}

/// Define a relation.
/// A relation is a function that creates a goal; its body is evaluated
/// inside a suspension, so relations may call themselves freely.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::State>
        {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::State>
        {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::State>
        {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::State>
        {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $( let $args: $crate::prelude::Term = $args.into(); )*
        move |st: $crate::prelude::State| {
            $( let $args = $args.clone(); )*
            $crate::prelude::Stream::suspend(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), st)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $( let $args: $crate::prelude::Term = $args.into(); )*
        move |st: $crate::prelude::State| {
            {
                $( let $args = $args.clone(); )*
                print!("{} apply:", stringify!($name));
                $( print!(" {}={:?}", stringify!($args), st.s_map().reify(&$args)); )*
                let probe = $crate::prelude::Goal::apply(&$crate::conj!($($g),*), st.clone());
                match probe {
                    $crate::prelude::Stream::Mature(first, next) => {
                        print!(" succeeded with");
                        $( print!(" {}={:?}", stringify!($args), first.s_map().reify(&$args)); )*
                        if next.is_empty() {
                            println!();
                        } else {
                            println!(" ...");
                        }
                    }
                    $crate::prelude::Stream::Immature(_) => println!(" ..."),
                    $crate::prelude::Stream::Empty => println!(" failed."),
                }
            }
            $( let $args = $args.clone(); )*
            $crate::prelude::Stream::suspend(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), st)
            })
        }
    }};
}

/// Run one or more goals against the empty state and reify each answer.
///
/// `run!(n, q, goal...)` realizes at most `n` answers; `run!(*, q,
/// goal...)` realizes all of them (and does not return if there are
/// infinitely many); `run!(q, goal...)` returns a lazy iterator instead.
/// In every form `q` names the query variable. The variants taking
/// `(x, y, ...)` instead of `q` query several variables at once by
/// unifying the sequence `(x y ...)` with the query variable.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@vars *, ($($x),*), $($body)*)
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ *, $q, $($g),*)
    };

    ($n:expr, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@vars $n, ($($x),*), $($body)*)
    };

    ($n:tt, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, $q, $($g),*)
    };

    (($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@vars iter, ($($x),*), $($body)*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, $q, $($g),*)
    };

    (@vars $n:tt, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, __q, {
            $crate::fresh!(
                ($($x),*),
                $crate::goals::primitive::eq($crate::seq![$($x),*], __q),
                $($g),*
            )
        })
    };

    (@ *, $q:ident, $($g:expr),* $(,)?) => {{
        let goal = $crate::goals::primitive::call_fresh(move |$q: $crate::prelude::LVar| {
            let _ = &$q;
            $crate::conj!($($g),*)
        });
        $crate::prelude::Goal::run_inf(&goal)
            .map(|st| $crate::core::reify::reify_first(&st))
    }};

    (@ iter, $q:ident, $($g:expr),* $(,)?) => {{
        let goal = $crate::goals::primitive::call_fresh(move |$q: $crate::prelude::LVar| {
            let _ = &$q;
            $crate::conj!($($g),*)
        });
        ::std::iter::Iterator::map(
            $crate::prelude::Goal::iter(&goal),
            |st| $crate::core::reify::reify_first(&st),
        )
    }};

    (@ $n:expr, $q:ident, $($g:expr),* $(,)?) => {{
        let goal = $crate::goals::primitive::call_fresh(move |$q: $crate::prelude::LVar| {
            let _ = &$q;
            $crate::conj!($($g),*)
        });
        $crate::prelude::Goal::run(&goal, $n)
            .map(|st| $crate::core::reify::reify_first(&st))
    }};
}
