use std::collections::HashMap;

/// A stack of lexical scopes mapping names to bindings.
///
/// Both the evaluator (binding [`Value`](crate::interpreter::value::core::Value)s)
/// and the type checker (binding [`Type`](crate::interpreter::checker::types::Type)s)
/// use this. The bottom scope is the global scope; it is created with the
/// stack and is never popped, so the stack is never empty. Scopes are pushed
/// and popped in strict last-in-first-out order as blocks are entered and
/// left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeStack<T> {
    scopes: Vec<HashMap<String, T>>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeStack<T> {
    /// Creates a stack holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// The number of scopes currently on the stack, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Adds a fresh empty scope on top of the stack.
    ///
    /// # Example
    /// ```
    /// use imp::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::<i64>::new();
    /// scopes.push_scope();
    ///
    /// assert_eq!(scopes.depth(), 2);
    /// ```
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Removes the innermost scope and every binding in it.
    ///
    /// The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Finds the innermost binding of `name`.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Shadows bindings of the same name in outer scopes until the innermost
    /// scope is popped, and overwrites a binding of the same name in the
    /// innermost scope itself.
    ///
    /// # Example
    /// ```
    /// use imp::interpreter::scope::ScopeStack;
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.declare("x", 1);
    /// scopes.push_scope();
    /// scopes.declare("x", 2);
    /// assert_eq!(scopes.lookup("x"), Some(&2));
    ///
    /// scopes.pop_scope();
    /// assert_eq!(scopes.lookup("x"), Some(&1));
    /// ```
    pub fn declare(&mut self, name: &str, value: T) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Overwrites the innermost binding of `name`, if `accepts` allows
    /// replacing its current value with `value`.
    ///
    /// Outer bindings are never considered once an inner one is found.
    ///
    /// # Errors
    /// Hands `value` back, untouched, if `name` is unbound or `accepts`
    /// rejected the replacement. The stack is unchanged in both cases.
    pub fn assign_if(&mut self,
                     name: &str,
                     value: T,
                     accepts: impl FnOnce(&T, &T) -> bool)
                     -> Result<(), AssignError<T>> {
        let Some(slot) = self.scopes
                             .iter_mut()
                             .rev()
                             .find_map(|scope| scope.get_mut(name))
        else {
            return Err(AssignError::Unbound(value));
        };

        if accepts(slot, &value) {
            *slot = value;
            Ok(())
        } else {
            Err(AssignError::Rejected(value))
        }
    }
}

/// Why [`ScopeStack::assign_if`] refused an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError<T> {
    /// No scope binds the name.
    Unbound(T),
    /// The innermost binding exists but may not be replaced by this value.
    Rejected(T),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_prefers_innermost_binding() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);
        scopes.declare("y", 10);
        scopes.push_scope();
        scopes.declare("x", 2);

        assert_eq!(scopes.lookup("x"), Some(&2));
        assert_eq!(scopes.lookup("y"), Some(&10));
        assert_eq!(scopes.lookup("z"), None);
    }

    #[test]
    fn declare_overwrites_within_the_same_scope() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);
        scopes.declare("x", 2);

        assert_eq!(scopes.lookup("x"), Some(&2));
    }

    #[test]
    fn popped_bindings_disappear() {
        let mut scopes = ScopeStack::new();
        scopes.push_scope();
        scopes.declare("inner", 1);
        scopes.pop_scope();

        assert_eq!(scopes.lookup("inner"), None);
    }

    #[test]
    fn global_scope_survives_extra_pops() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);
        scopes.pop_scope();
        scopes.pop_scope();

        assert_eq!(scopes.depth(), 1);
        assert_eq!(scopes.lookup("x"), Some(&1));
    }

    #[test]
    fn assignment_mutates_nearest_binding_only() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);
        scopes.push_scope();
        scopes.declare("x", 2);

        assert_eq!(scopes.assign_if("x", 3, |_, _| true), Ok(()));
        assert_eq!(scopes.lookup("x"), Some(&3));

        scopes.pop_scope();
        assert_eq!(scopes.lookup("x"), Some(&1));
    }

    #[test]
    fn assignment_reaches_outer_scopes() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);
        scopes.push_scope();
        scopes.push_scope();

        assert_eq!(scopes.assign_if("x", 5, |_, _| true), Ok(()));
        scopes.pop_scope();
        scopes.pop_scope();
        assert_eq!(scopes.lookup("x"), Some(&5));
    }

    #[test]
    fn refused_assignments_leave_the_stack_alone() {
        let mut scopes = ScopeStack::new();
        scopes.declare("x", 1);

        assert_eq!(scopes.assign_if("y", 2, |_, _| true), Err(AssignError::Unbound(2)));
        assert_eq!(scopes.assign_if("x", 2, |_, _| false), Err(AssignError::Rejected(2)));
        assert_eq!(scopes.lookup("x"), Some(&1));
        assert_eq!(scopes.lookup("y"), None);
    }
}
