use std::fmt;

/// `Scope` is the location of a value within a configuration document.
/// It's a stack-allocated linked list, and renders as a JSON pointer.
///
/// ```
/// use transcode::Scope;
///
/// let s0 = Scope::Root;
/// let s1 = s0.push_prop("rules");
/// let s2 = s1.push_item(3);
/// let s3 = s2.push_prop("a/b~c");
///
/// assert_eq!("/rules/3/a~1b~0c", s3.to_string());
/// assert_eq!("", s0.to_string());
/// ```
#[derive(Copy, Clone)]
pub enum Scope<'a> {
    Root,
    Property {
        parent: &'a Scope<'a>,
        name: &'a str,
    },
    Item {
        parent: &'a Scope<'a>,
        index: usize,
    },
}

impl<'a> Scope<'a> {
    /// Returns a new Scope that extends this one with the given property.
    pub fn push_prop(&'a self, name: &'a str) -> Scope<'a> {
        Scope::Property { parent: self, name }
    }

    /// Returns a new Scope that extends this one with the given index.
    pub fn push_item(&'a self, index: usize) -> Scope<'a> {
        Scope::Item {
            parent: self,
            index,
        }
    }
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scope::Root => Ok(()),
            Scope::Property { parent, name } => {
                write!(f, "{parent}/")?;
                for c in name.chars() {
                    match c {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        _ => fmt::Write::write_char(f, c)?,
                    }
                }
                Ok(())
            }
            Scope::Item { parent, index } => write!(f, "{parent}/{index}"),
        }
    }
}

impl<'a> fmt::Debug for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}
