//! # Pool Lifecycle Flows
//!
//! The pool delegates every per-record step to the scalar dynamics, so these
//! tests drive both crates together: full allocate → free → evaporate → reuse
//! cycles, custom relaxation targets, aggregate conservation over a complete
//! cycle, and cross-pool determinism.

#[cfg(test)]
mod tests {
    use qk_02_dynamics::DynamicsConfig;
    use qk_05_pool::{LifecycleState, PoolAggregates, PoolConfig, PoolError, ResourcePool};

    /// Ticks until `target` records remain occupied, panicking past `budget`.
    fn tick_until_occupied(pool: &mut ResourcePool, target: usize, budget: u32) {
        for _ in 0..budget {
            if pool.occupied() == target {
                return;
            }
            pool.tick();
        }
        panic!(
            "pool never reached {} occupied within {} ticks (stuck at {})",
            target,
            budget,
            pool.occupied()
        );
    }

    fn slot_index(config: &PoolConfig, address: u64) -> usize {
        ((address - config.base_address) / config.page_size) as usize
    }

    // =========================================================================
    // FULL CYCLE: ALLOCATE → FREE → EVAPORATE → REUSE
    // =========================================================================

    #[test]
    fn test_allocation_to_evaporation_cycle() {
        let dynamics = DynamicsConfig::default();
        let config = PoolConfig {
            capacity: 4,
            ..PoolConfig::default()
        };
        let mut pool = ResourcePool::new(config, dynamics);

        let pages: Vec<u64> = (0..4).map(|_| pool.allocate(1024).expect("page")).collect();
        assert_eq!(pool.occupied(), 4);
        assert_eq!(
            pool.allocate(1024),
            Err(PoolError::Exhausted { capacity: 4 })
        );

        // Freeing is lazy: the slots stay occupied until evaporation completes.
        pool.free(pages[1]);
        pool.free(pages[2]);
        assert_eq!(pool.occupied(), 4);
        assert_eq!(
            pool.allocate(1024),
            Err(PoolError::Exhausted { capacity: 4 })
        );

        tick_until_occupied(&mut pool, 2, 3000);
        assert_eq!(pool.report().records.len(), 2);

        // Both reclaimed slots sit at theta 0; the tie goes to the lower index,
        // so the original addresses come back in order.
        let reused_a = pool.allocate(2048).expect("reuse");
        let reused_b = pool.allocate(2048).expect("reuse");
        assert_eq!(reused_a, pages[1]);
        assert_eq!(reused_b, pages[2]);
        assert_eq!(pool.occupied(), 4);
    }

    // =========================================================================
    // CUSTOM RELAXATION TARGET
    // =========================================================================

    #[test]
    fn test_custom_equilibrium_keeps_records_allocated() {
        // Pulling toward theta = 2.0 parks records short of every projection
        // band, so they stay Allocated indefinitely.
        let dynamics = DynamicsConfig {
            theta_equilibrium: 2.0,
            relaxation_rate: 0.05,
            ..DynamicsConfig::default()
        };
        let config = PoolConfig {
            capacity: 4,
            ..PoolConfig::default()
        };
        let mut pool = ResourcePool::new(config, dynamics);
        let address = pool.allocate(4096).expect("page");

        for _ in 0..2000 {
            pool.tick();
        }

        let snapshot = pool
            .snapshot(slot_index(&config, address))
            .expect("snapshot");
        assert_eq!(snapshot.lifecycle, LifecycleState::Allocated);
        assert!(
            (snapshot.theta - 2.0).abs() < 0.5,
            "record did not settle near the custom equilibrium: {}",
            snapshot.theta
        );
        assert_eq!(pool.occupied(), 1);
    }

    // =========================================================================
    // AGGREGATE CONSERVATION OVER A FULL CYCLE
    // =========================================================================

    #[test]
    fn test_aggregates_return_to_vacuum_after_full_cycle() {
        let dynamics = DynamicsConfig::default();
        let config = PoolConfig {
            capacity: 2,
            ..PoolConfig::default()
        };
        let mut pool = ResourcePool::new(config, dynamics);

        let a = pool.allocate(4096).expect("page");
        let b = pool.allocate(4096).expect("page");
        pool.tick();
        assert!(pool.aggregates().metric_determinant > 1.0);
        assert!(pool.aggregates().total_entropy > 0.0);

        pool.free(a);
        pool.free(b);
        tick_until_occupied(&mut pool, 0, 3000);

        // A drained pool reads exactly like a fresh one.
        assert_eq!(pool.aggregates(), PoolAggregates::default());
        assert!(pool.report().records.is_empty());
    }

    // =========================================================================
    // DETERMINISM ACROSS POOLS
    // =========================================================================

    #[test]
    fn test_pools_with_identical_traffic_agree() {
        let dynamics = DynamicsConfig::default();
        let config = PoolConfig {
            capacity: 8,
            ..PoolConfig::default()
        };
        let mut left = ResourcePool::new(config, dynamics);
        let mut right = ResourcePool::new(config, dynamics);

        for pool in [&mut left, &mut right] {
            let a = pool.allocate(512).expect("page");
            let _b = pool.allocate(1024).expect("page");
            let _c = pool.allocate(2048).expect("page");
            pool.free(a);
            for _ in 0..500 {
                pool.tick();
            }
        }

        assert_eq!(left.report(), right.report());
        assert_eq!(left.occupied(), right.occupied());
    }

    // =========================================================================
    // PHASE STAGGERING
    // =========================================================================

    #[test]
    fn test_slot_phase_step_decorrelates_records() {
        let dynamics = DynamicsConfig::default();

        // Zero step: two records allocated together stay in lockstep.
        let uniform = PoolConfig {
            capacity: 4,
            slot_phase_step: 0.0,
            ..PoolConfig::default()
        };
        let mut pool = ResourcePool::new(uniform, dynamics);
        let a = pool.allocate(4096).expect("page");
        let b = pool.allocate(4096).expect("page");
        for _ in 0..100 {
            pool.tick();
        }
        let theta_a = pool.snapshot(slot_index(&uniform, a)).expect("a").theta;
        let theta_b = pool.snapshot(slot_index(&uniform, b)).expect("b").theta;
        assert_eq!(theta_a, theta_b);

        // Default step: the same traffic spreads the angles apart.
        let staggered = PoolConfig {
            capacity: 4,
            ..PoolConfig::default()
        };
        let mut pool = ResourcePool::new(staggered, dynamics);
        let a = pool.allocate(4096).expect("page");
        let b = pool.allocate(4096).expect("page");
        for _ in 0..100 {
            pool.tick();
        }
        let theta_a = pool.snapshot(slot_index(&staggered, a)).expect("a").theta;
        let theta_b = pool.snapshot(slot_index(&staggered, b)).expect("b").theta;
        assert!(
            (theta_a - theta_b).abs() > 1e-9,
            "staggered offsets failed to decorrelate: {} vs {}",
            theta_a,
            theta_b
        );
    }
}
