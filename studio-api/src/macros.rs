/// Builder-style setters for request payload fields.
///
/// `setter!(payload.field: Ty)` assigns `self.payload.field`,
/// `setter!(opt payload.field: Ty)` wraps the value in `Some`.
macro_rules! setter {
    ($field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield<T>(mut self, $subfield: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field.$subfield = $subfield.into();
            self
        }
    };

    (opt $field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield<T>(mut self, $subfield: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field.$subfield = std::option::Option::Some($subfield.into());
            self
        }
    };
}

pub(crate) use setter;
