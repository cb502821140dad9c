use std::cell::RefCell;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use crate::api::capture::*;
use crate::model::Cardinality;
use crate::prelude::Collectable;

fn convert<T: FromStr>(token: &str) -> Result<T, InvalidBind> {
    T::from_str(token).map_err(|_| InvalidBind {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// A field that binds a single value (precisely 1).
pub struct Scalar<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    default: Option<T>,
}

impl<'a, T> OptionField for Scalar<'a, T> {}
impl<'a, T> PositionalField for Scalar<'a, T> {}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar field.
    pub fn new(variable: &'a mut T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            default: None,
        }
    }

    /// Declare a default, applied when the field receives no input.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

impl<'a, T> GenericBindable<'a, T> for Scalar<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidBind> {
        let value = convert::<T>(token)?;
        **self.variable.borrow_mut() = value;
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(value) = self.default.take() {
            **self.variable.borrow_mut() = value;
        }
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Fixed(1)
    }

    fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A field that binds no values (precisely 0); presence assigns the target.
pub struct Switch<'a, T> {
    variable: Rc<RefCell<&'a mut T>>,
    target: Option<T>,
}

impl<'a, T> OptionField for Switch<'a, T> {}

impl<'a, T> Switch<'a, T> {
    /// Create a switch field.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            target: Some(target),
        }
    }
}

impl<'a, T> GenericBindable<'a, T> for Switch<'a, T> {
    fn matched(&mut self) {
        **self.variable.borrow_mut() = self
            .target
            .take()
            .expect("internal error - must be able to take the Switch#target");
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidBind> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn settle(&mut self) {
        // Absence leaves the variable untouched.
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Fixed(0)
    }
}

/// A field that maps down to [`Option`], binding a single value (precisely 1).
pub struct Optional<'a, T> {
    variable: Rc<RefCell<&'a mut Option<T>>>,
    default: Option<T>,
}

impl<'a, T> OptionField for Optional<'a, T> {}

impl<'a, T> Optional<'a, T> {
    /// Create an optional field.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            default: None,
        }
    }

    /// Declare a default, applied when the field receives no input.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

impl<'a, T> GenericBindable<'a, T> for Optional<'a, T>
where
    T: FromStr,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidBind> {
        let value = convert::<T>(token)?;
        self.variable.borrow_mut().replace(value);
        Ok(())
    }

    fn settle(&mut self) {
        if let Some(value) = self.default.take() {
            self.variable.borrow_mut().replace(value);
        }
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Fixed(1)
    }

    fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A field that binds multiple values (specifiable [`Cardinality`]).
///
/// The collection's initial contents serve as its default; there is no
/// declared default.
pub struct Sequence<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: Rc<RefCell<&'a mut C>>,
    cardinality: Cardinality,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> OptionField for Sequence<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> PositionalField for Sequence<'a, C, T> where C: 'a + Collectable<T> {}

impl<'a, C, T> Sequence<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a sequence field.
    pub fn new(variable: &'a mut C, cardinality: Cardinality) -> Self {
        Self {
            variable: Rc::new(RefCell::new(variable)),
            cardinality,
            _phantom: PhantomData,
        }
    }
}

impl<'a, C, T> GenericBindable<'a, T> for Sequence<'a, C, T>
where
    T: FromStr,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidBind> {
        let value = convert::<T>(token)?;
        (**self.variable.borrow_mut()).add(value);
        Ok(())
    }

    fn settle(&mut self) {
        // The initial contents are the default.
    }

    fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
