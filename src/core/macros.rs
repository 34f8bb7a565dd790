//! Macros for declaring snapshot types with copy-with derivation.

/// Generate a snapshot struct together with its partial-override patch type.
///
/// The struct gets the derives the [`crate::core::Snapshot`] trait requires
/// and a `Snapshot` impl with the given label. When a `patch:` name is
/// supplied, a companion struct with one `Option` per field is generated
/// along with `copy_with`, which clones the snapshot and overrides only the
/// fields present in the patch.
///
/// # Example
///
/// ```
/// patternbook::snapshot_struct! {
///     pub struct CanvasState {
///         pub shapes: Vec<String>,
///         pub zoom: u32,
///     }
///     label: "canvas"
///     patch: CanvasPatch
/// }
///
/// let canvas = CanvasState { shapes: vec![], zoom: 100 };
/// let zoomed = canvas.copy_with(CanvasPatch {
///     zoom: Some(250),
///     ..Default::default()
/// });
/// assert_eq!(zoomed.zoom, 250);
/// assert_eq!(zoomed.shapes, canvas.shapes);
/// ```
#[macro_export]
macro_rules! snapshot_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }

        label: $label:literal
        $(dirty: $dirty:ident)?
        $(patch: $patch:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field : $ty
            ),*
        }

        impl $crate::core::Snapshot for $name {
            fn label(&self) -> &str {
                $label
            }

            $(
                fn is_dirty(&self) -> bool {
                    self.$dirty
                }
            )?
        }

        $crate::snapshot_struct! {
            @patch ($($patch)?)
            $vis struct $name {
                $($field_vis $field : $ty),*
            }
        }
    };
    (
        @patch ()
        $vis:vis struct $name:ident {
            $($field_vis:vis $field:ident : $ty:ty),*
        }
    ) => {};
    (
        @patch ($patch:ident)
        $vis:vis struct $name:ident {
            $($field_vis:vis $field:ident : $ty:ty),*
        }
    ) => {
        /// Partial override for the matching snapshot type. Fields left
        /// as `None` keep the previous snapshot's values.
        #[derive(Clone, Debug, Default)]
        $vis struct $patch {
            $($field_vis $field : Option<$ty>),*
        }

        impl $name {
            /// Derive a new snapshot, overriding only the fields set in
            /// the patch. The original is left untouched.
            $vis fn copy_with(&self, patch: $patch) -> Self {
                Self {
                    $(
                        $field: match patch.$field {
                            Some(value) => value,
                            None => self.$field.clone(),
                        }
                    ),*
                }
            }
        }
    };
}
