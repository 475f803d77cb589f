pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod remove_item;
        pub mod store;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod place_order;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod observer;
        pub mod storage;
    }
    pub mod checkout {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
