mod update_category;

use funews_test_utils::prelude::*;

use super::*;
