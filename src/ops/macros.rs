/// Declares an operation enum over an element type, along with the list of
/// its variant names.
#[macro_export]
macro_rules! op_variants {
    ($name: ident<$t: ident>, $($variant_name: ident($($arg: ty), *)), * $(,)?) => {
        $crate::as_item! {
            #[derive(Debug, Clone, PartialEq)]
            pub enum $name<$t> {
                $($variant_name($($arg), *),)*
            }
        }

        impl<$t> $name<$t> {
            pub const NAMES: &'static [&'static str] = &[$(stringify!($variant_name)),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant_name(..) => stringify!($variant_name),)*
                }
            }
        }
    }
}

#[macro_export]
macro_rules! as_item {
    ($i: item) => {
        $i
    }
}
