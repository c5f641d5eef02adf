pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod engine;
        pub mod get_summary;
        pub mod remove_item;
        pub mod session;
        pub mod update_quantity;
        pub mod writer;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
    pub mod catalog {
        pub mod get_all;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod command;
        pub mod errors;
        pub mod model;
        pub mod outcome;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_summary;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
