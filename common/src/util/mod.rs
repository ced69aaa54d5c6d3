pub mod url_util;
